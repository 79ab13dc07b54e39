//! Persistent geocode cache: one JSON object per line, append-only.
//!
//! Load is tolerant (a corrupt or missing file just means an empty cache)
//! and nothing is ever rewritten in place, so a crash mid-append loses at
//! most the last line. Negative entries remember names the remote geocoder
//! could not find, so they are asked at most once per process lifetime.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geo::Coordinates;

/// Cap on remembered misses so a flood of garbage names cannot grow the
/// file without bound.
const MAX_NEGATIVE: usize = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheRecord {
    key: String,
    lat: Option<f64>,
    lng: Option<f64>,
    #[serde(default)]
    source: String,
}

#[derive(Debug, Clone)]
pub enum CachedValue {
    Found(Coordinates),
    /// The remote geocoder already said no.
    Miss,
}

pub struct GeocodeCache {
    entries: RwLock<HashMap<String, CachedValue>>,
    negatives: RwLock<usize>,
    path: Option<PathBuf>,
    // serializes file appends; readers never take it
    append_lock: Mutex<()>,
}

impl GeocodeCache {
    /// In-memory only, for tests and `GEOCODE_CACHE_PATH=none`.
    pub fn memory() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            negatives: RwLock::new(0),
            path: None,
            append_lock: Mutex::new(()),
        }
    }

    pub fn load(path: &Path) -> Self {
        let mut entries = HashMap::new();
        let mut negatives = 0usize;
        match std::fs::read_to_string(path) {
            Ok(body) => {
                for line in body.lines() {
                    let Ok(rec) = serde_json::from_str::<CacheRecord>(line) else {
                        continue;
                    };
                    let value = match (rec.lat, rec.lng) {
                        (Some(lat), Some(lng)) => CachedValue::Found(Coordinates::new(lat, lng)),
                        _ => {
                            negatives += 1;
                            CachedValue::Miss
                        }
                    };
                    entries.entry(rec.key).or_insert(value);
                }
                debug!("geocode cache: {} entries from {}", entries.len(), path.display());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("geocode cache unreadable, starting empty: {e}"),
        }
        Self {
            entries: RwLock::new(entries),
            negatives: RwLock::new(negatives),
            path: Some(path.to_path_buf()),
            append_lock: Mutex::new(()),
        }
    }

    pub fn key(name: &str, region_hint: Option<&str>) -> String {
        match region_hint {
            Some(h) => format!("{name}|{h}"),
            None => name.to_string(),
        }
    }

    pub fn get(&self, key: &str) -> Option<CachedValue> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    /// Append-only: an existing entry is never overwritten.
    pub fn put(&self, key: &str, coords: Coordinates, source: &str) {
        {
            let Ok(mut map) = self.entries.write() else { return };
            if map.contains_key(key) {
                return;
            }
            map.insert(key.to_string(), CachedValue::Found(coords));
        }
        self.persist(CacheRecord {
            key: key.to_string(),
            lat: Some(coords.lat),
            lng: Some(coords.lng),
            source: source.to_string(),
        });
    }

    pub fn put_negative(&self, key: &str) {
        {
            let Ok(count) = self.negatives.read() else { return };
            if *count >= MAX_NEGATIVE {
                return;
            }
        }
        {
            let Ok(mut map) = self.entries.write() else { return };
            if map.contains_key(key) {
                return;
            }
            map.insert(key.to_string(), CachedValue::Miss);
        }
        if let Ok(mut count) = self.negatives.write() {
            *count += 1;
        }
        self.persist(CacheRecord {
            key: key.to_string(),
            lat: None,
            lng: None,
            source: "negative".to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, record: CacheRecord) {
        let Some(path) = &self.path else { return };
        let Ok(line) = serde_json::to_string(&record) else { return };
        let Ok(_guard) = self.append_lock.lock() else { return };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| writeln!(f, "{line}"));
        if let Err(e) = result {
            warn!("geocode cache append failed: {e}");
        }
    }
}
