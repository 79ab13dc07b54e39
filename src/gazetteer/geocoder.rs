//! External geocoder collaborator and the rate limiting in front of it.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::error::GeocoderError;
use crate::geo::Coordinates;

/// Seam for the external geocoding service; tests inject canned backends.
#[async_trait]
pub trait RemoteGeocoder: Send + Sync {
    /// `Ok(None)` means the service answered "no such place"; errors are
    /// transport-level failures the caller may degrade around.
    async fn lookup(
        &self,
        name: &str,
        region_hint: Option<&str>,
    ) -> Result<Option<Coordinates>, GeocoderError>;
}

#[derive(Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Deserialize)]
struct GeoResult {
    geometry: GeoPoint,
}

#[derive(Deserialize)]
struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// OpenCage-style JSON geocoder.
pub struct HttpGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpGeocoder {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client, endpoint, api_key }
    }
}

#[async_trait]
impl RemoteGeocoder for HttpGeocoder {
    async fn lookup(
        &self,
        name: &str,
        region_hint: Option<&str>,
    ) -> Result<Option<Coordinates>, GeocoderError> {
        let query = match region_hint {
            Some(oblast) => format!("{name}, {oblast} область, Україна"),
            None => format!("{name}, Україна"),
        };
        debug!("remote geocode: {query}");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.as_str()),
                ("key", self.api_key.as_str()),
                ("language", "uk"),
                ("countrycode", "ua"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(GeocoderError::Status(resp.status().as_u16()));
        }

        // A malformed body is treated as "not found", not a failure.
        let Ok(body) = resp.json::<GeoResponse>().await else {
            return Ok(None);
        };
        Ok(body
            .results
            .first()
            .map(|r| Coordinates::new(r.geometry.lat, r.geometry.lng)))
    }
}

/// Token bucket: at most `rate` requests per second process-wide, with a
/// small burst allowance.
pub struct RateLimiter {
    rate: f64,
    capacity: f64,
    state: Mutex<Bucket>,
}

struct Bucket {
    tokens: f64,
    refilled_at: Instant,
}

impl RateLimiter {
    pub fn new(rate: f64, capacity: f64) -> Self {
        Self {
            rate,
            capacity,
            state: Mutex::new(Bucket {
                tokens: capacity,
                refilled_at: Instant::now(),
            }),
        }
    }

    /// Waits until a token is available, then consumes it.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.state.lock().await;
                let now = Instant::now();
                let elapsed = now.duration_since(bucket.refilled_at).as_secs_f64();
                bucket.tokens = (bucket.tokens + elapsed * self.rate).min(self.capacity);
                bucket.refilled_at = now;
                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    return;
                }
                Duration::from_secs_f64((1.0 - bucket.tokens) / self.rate)
            };
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn limiter_spaces_out_requests() {
        let limiter = RateLimiter::new(1.0, 1.0);
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        // two of the three had to wait a full second each
        assert!(start.elapsed() >= Duration::from_millis(1900));
    }
}
