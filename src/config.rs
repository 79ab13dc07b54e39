use std::path::PathBuf;
use std::time::Duration;

/// Pipeline tuning knobs, all overridable from the environment.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Synthetic trajectory length when only a direction word is known.
    pub trajectory_offset_km: f64,
    /// Region-header count at or above which a message may be multi-regional.
    pub multi_region_min_headers: usize,
    /// Threat+locative line count required together with the header count.
    pub multi_region_min_threat_lines: usize,
    pub geocoder_enabled: bool,
    pub geocoder_endpoint: String,
    pub geocoder_api_key: String,
    pub geocoder_timeout: Duration,
    pub cache_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trajectory_offset_km: 50.0,
            multi_region_min_headers: 2,
            multi_region_min_threat_lines: 3,
            geocoder_enabled: false,
            geocoder_endpoint: "https://api.opencagedata.com/geocode/v1/json".to_string(),
            geocoder_api_key: String::new(),
            geocoder_timeout: Duration::from_millis(7000),
            cache_path: Some(PathBuf::from("./geocode_cache.jsonl")),
        }
    }
}

impl EngineConfig {
    /// Builds the config from environment variables.
    ///
    /// | Variable | Default | Meaning |
    /// |---|---|---|
    /// | `TRAJECTORY_OFFSET_KM` | `50` | length of synthetic direction stubs |
    /// | `MULTI_REGION_MIN_HEADERS` | `2` | headers needed for multi-regional mode |
    /// | `MULTI_REGION_MIN_THREAT_LINES` | `3` | threat lines needed for multi-regional mode |
    /// | `GEOCODER_ENABLED` | `false` | allow tier-5 remote lookups |
    /// | `GEOCODER_ENDPOINT` | OpenCage URL | remote geocoder base URL |
    /// | `GEOCODER_API_KEY` | empty | remote geocoder key |
    /// | `GEOCODER_TIMEOUT_MS` | `7000` | per-request timeout |
    /// | `GEOCODE_CACHE_PATH` | `./geocode_cache.jsonl` | persistent cache file, `none` disables |
    pub fn from_env() -> Self {
        let def = Self::default();

        let num = |key: &str, fallback: f64| -> f64 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(fallback)
        };
        let int = |key: &str, fallback: usize| -> usize {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(fallback)
        };

        let cache_path = match std::env::var("GEOCODE_CACHE_PATH") {
            Ok(v) if v.eq_ignore_ascii_case("none") => None,
            Ok(v) => Some(PathBuf::from(v)),
            Err(_) => def.cache_path.clone(),
        };

        Self {
            trajectory_offset_km: num("TRAJECTORY_OFFSET_KM", def.trajectory_offset_km),
            multi_region_min_headers: int("MULTI_REGION_MIN_HEADERS", def.multi_region_min_headers),
            multi_region_min_threat_lines: int(
                "MULTI_REGION_MIN_THREAT_LINES",
                def.multi_region_min_threat_lines,
            ),
            geocoder_enabled: std::env::var("GEOCODER_ENABLED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(def.geocoder_enabled),
            geocoder_endpoint: std::env::var("GEOCODER_ENDPOINT")
                .unwrap_or(def.geocoder_endpoint),
            geocoder_api_key: std::env::var("GEOCODER_API_KEY").unwrap_or_default(),
            geocoder_timeout: Duration::from_millis(
                int("GEOCODER_TIMEOUT_MS", 7000) as u64,
            ),
            cache_path,
        }
    }
}

impl std::fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "offset={}km headers>={} threat_lines>={} geocoder={}",
            self.trajectory_offset_km,
            self.multi_region_min_headers,
            self.multi_region_min_threat_lines,
            if self.geocoder_enabled { "on" } else { "off" },
        )
    }
}
