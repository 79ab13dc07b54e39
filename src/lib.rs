//! Threat extraction and geolocation for Ukrainian air-alert channel text.
//!
//! Raw message in, geolocated and classified [`ThreatRecord`]s out. The
//! transport that delivers messages and whatever serves the records are
//! both outside this crate; [`Engine::process_message`] is the seam.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod gazetteer;
pub mod geo;
pub mod morphology;
pub mod normalize;
pub mod patterns;
pub mod segmenter;
pub mod threat;
pub mod trajectory;

pub use builder::ThreatRecord;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::ResolveError;
pub use gazetteer::GazetteerService;
