//! Typed failures of the resolution pipeline.
//!
//! Nothing here ever escapes `Engine::process_message`; a failed mention is
//! logged and dropped, the rest of the message still produces records.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("location '{0}' not found in any gazetteer tier")]
    NotFound(String),

    #[error("empty location query")]
    EmptyQuery,

    #[error("remote geocoder failed for '{name}': {reason}")]
    GeocoderFailure { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum GeocoderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geocoder returned status {0}")]
    Status(u16),
}
