//! Place-name resolution: static tables, persistent cache, and the
//! rate-limited remote geocoder behind them.

pub mod cache;
pub mod data;
pub mod geocoder;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::geo::Coordinates;
use crate::morphology;
use self::cache::{CachedValue, GeocodeCache};
use self::geocoder::{RateLimiter, RemoteGeocoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    City,
    Raion,
    Oblast,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub canonical: String,
    pub coords: Coordinates,
    pub kind: PlaceKind,
    /// Which tier produced the answer; goes into debug logs only.
    pub tier: &'static str,
    /// Set for ambiguous table hits and oblast-centroid fallbacks.
    pub low_confidence: bool,
}

impl Resolution {
    fn city(name: &str, coords: Coordinates, tier: &'static str, low_confidence: bool) -> Self {
        Self {
            canonical: name.to_string(),
            coords,
            kind: PlaceKind::City,
            tier,
            low_confidence,
        }
    }
}

/// Owns every resolution tier. Built once, shared by reference; all
/// interior state is behind its own lock.
pub struct GazetteerService {
    cache: GeocodeCache,
    remote: Option<Arc<dyn RemoteGeocoder>>,
    limiter: RateLimiter,
    /// One semaphore per key currently being looked up remotely; late
    /// arrivals wait on it instead of issuing a duplicate request.
    inflight: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl GazetteerService {
    pub fn new(cache: GeocodeCache, remote: Option<Arc<dyn RemoteGeocoder>>) -> Self {
        Self {
            cache,
            remote,
            limiter: RateLimiter::new(1.0, 1.0),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub fn offline(cache: GeocodeCache) -> Self {
        Self::new(cache, None)
    }

    /// Lowercased, quote- and prefix-free lookup key.
    fn normalize_query(raw: &str) -> String {
        let lower = raw.trim().to_lowercase();
        let cleaned: String = lower
            .chars()
            .filter(|c| !matches!(c, '"' | '«' | '»' | '(' | ')' | '!' | '?'))
            .collect();
        let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
        morphology::strip_prefix(&collapsed).to_string()
    }

    fn static_lookup(&self, name: &str, region_hint: Option<&str>) -> Option<(&'static data::City, bool)> {
        let canonical = data::CITY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, c)| *c)
            .unwrap_or(name);

        let matches: Vec<&'static data::City> = data::CITIES
            .iter()
            .filter(|c| c.name == canonical)
            .collect();

        match matches.len() {
            0 => None,
            1 => Some((matches[0], false)),
            _ => {
                if let Some(hint) = region_hint {
                    let hint_oblast = self
                        .oblast_canonical(hint)
                        .unwrap_or_else(|| hint.to_string());
                    if let Some(hit) = matches.iter().copied().find(|c| c.oblast == hint_oblast) {
                        return Some((hit, false));
                    }
                }
                // table order is the documented priority for shared names
                warn!("ambiguous place '{canonical}', taking best-known entry");
                Some((matches[0], true))
            }
        }
    }

    fn oblast_canonical(&self, name: &str) -> Option<String> {
        let trimmed = name
            .trim()
            .trim_end_matches(" область")
            .trim_end_matches(" обл.")
            .trim_end_matches(" обл");
        let nominative = morphology::to_nominative(trimmed);
        for candidate in [trimmed, nominative.as_str()] {
            if data::OBLASTS.iter().any(|(n, _, _)| *n == candidate) {
                return Some(candidate.to_string());
            }
            if let Some((_, c)) = data::OBLAST_ALIASES.iter().find(|(a, _)| *a == candidate) {
                return Some((*c).to_string());
            }
        }
        None
    }

    /// Oblast resolution is table-only and synchronous.
    pub fn resolve_oblast(&self, name: &str) -> Option<Resolution> {
        let canonical = self.oblast_canonical(&Self::normalize_query(name))?;
        let (_, lat, lng) = data::OBLASTS.iter().find(|(n, _, _)| *n == canonical)?;
        Some(Resolution {
            canonical,
            coords: Coordinates::new(*lat, *lng),
            kind: PlaceKind::Oblast,
            tier: "oblast",
            low_confidence: true,
        })
    }

    /// Raion by adjective stem: "вишгородський район" hits "вишгородськ".
    pub fn resolve_raion(&self, adjective: &str, region_hint: Option<&str>) -> Option<Resolution> {
        let query = Self::normalize_query(adjective);
        let hint_oblast = region_hint.and_then(|h| self.oblast_canonical(h));
        let candidates = data::RAIONS
            .iter()
            .filter(|(stem, _, _, _)| query.starts_with(stem));
        let hit = match &hint_oblast {
            Some(oblast) => candidates
                .clone()
                .find(|(_, o, _, _)| *o == oblast.as_str())
                .or_else(|| data::RAIONS.iter().find(|(stem, _, _, _)| query.starts_with(stem))),
            None => candidates.clone().next(),
        }?;
        Some(Resolution {
            canonical: format!("{}ий район", hit.0),
            coords: Coordinates::new(hit.2, hit.3),
            kind: PlaceKind::Raion,
            tier: "raion",
            low_confidence: false,
        })
    }

    /// Full tiered resolution for a settlement mention.
    ///
    /// Tier order: static exact, persistent cache, morphological variants
    /// against the static table, raion stems, oblast centroids, remote
    /// geocoder. A remote failure degrades to the hint's oblast centroid
    /// when one is present.
    pub async fn resolve(
        &self,
        raw: &str,
        region_hint: Option<&str>,
    ) -> Result<Resolution, ResolveError> {
        let query = Self::normalize_query(raw);
        if query.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        if let Some((city, ambiguous)) = self.static_lookup(&query, region_hint) {
            return Ok(Resolution::city(
                city.name,
                Coordinates::new(city.lat, city.lng),
                "static",
                ambiguous,
            ));
        }

        let key = GeocodeCache::key(&query, region_hint);
        match self.cache.get(&key) {
            Some(CachedValue::Found(coords)) => {
                return Ok(Resolution::city(&query, coords, "cache", false));
            }
            Some(CachedValue::Miss) => {
                // known remote miss: fall through to coarse tiers, skip tier 5
                return self
                    .coarse_fallback(&query, region_hint)
                    .ok_or_else(|| ResolveError::NotFound(query));
            }
            None => {}
        }

        for variant in morphology::name_variants(&query) {
            if let Some((city, ambiguous)) = self.static_lookup(&variant, region_hint) {
                return Ok(Resolution::city(
                    city.name,
                    Coordinates::new(city.lat, city.lng),
                    "morph",
                    ambiguous,
                ));
            }
        }

        // trailing sentence words often ride along the capture; retry
        // progressively shorter prefixes before giving up on the tables
        let words: Vec<&str> = query.split(' ').collect();
        for n in (1..words.len()).rev() {
            let prefix = words[..n].join(" ");
            for candidate in morphology::name_variants(&prefix) {
                if let Some((city, ambiguous)) = self.static_lookup(&candidate, region_hint) {
                    return Ok(Resolution::city(
                        city.name,
                        Coordinates::new(city.lat, city.lng),
                        "morph",
                        ambiguous,
                    ));
                }
            }
        }

        if let Some(raion) = self.resolve_raion(&query, region_hint) {
            return Ok(raion);
        }
        if let Some(oblast) = self.resolve_oblast(&query) {
            return Ok(oblast);
        }

        if self.remote.is_some() {
            match self.resolve_remote(&key, &query, region_hint).await {
                Ok(Some(coords)) => {
                    return Ok(Resolution::city(&query, coords, "remote", false));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("geocoder degraded for '{query}': {e}");
                    if let Some(fallback) = self.coarse_fallback(&query, region_hint) {
                        return Ok(fallback);
                    }
                }
            }
        }

        Err(ResolveError::NotFound(query))
    }

    /// Oblast-centroid stand-in used when the precise tiers are exhausted.
    fn coarse_fallback(&self, query: &str, region_hint: Option<&str>) -> Option<Resolution> {
        let hint = region_hint?;
        let oblast = self.resolve_oblast(hint)?;
        debug!("'{query}' pinned to {} centroid", oblast.canonical);
        Some(Resolution {
            canonical: query.to_string(),
            coords: oblast.coords,
            kind: PlaceKind::City,
            tier: "hint-centroid",
            low_confidence: true,
        })
    }

    /// Tier 5. Coalesces concurrent lookups of the same key and records the
    /// outcome (positive or negative) in the persistent cache.
    async fn resolve_remote(
        &self,
        key: &str,
        query: &str,
        region_hint: Option<&str>,
    ) -> Result<Option<Coordinates>, ResolveError> {
        let Some(remote) = &self.remote else {
            return Ok(None);
        };

        loop {
            if let Some(cached) = self.cache.get(key) {
                return Ok(match cached {
                    CachedValue::Found(c) => Some(c),
                    CachedValue::Miss => None,
                });
            }

            let waiter = {
                let mut inflight = self.inflight.lock().await;
                match inflight.get(key) {
                    Some(gate) => Some(gate.clone()),
                    None => {
                        inflight.insert(key.to_string(), Arc::new(Semaphore::new(0)));
                        None
                    }
                }
            };

            let Some(gate) = waiter else { break };
            // leader opens the gate once the cache holds the answer
            let _ = gate.acquire().await;
        }

        self.limiter.acquire().await;
        let outcome = remote.lookup(query, region_hint).await;

        match &outcome {
            Ok(Some(coords)) => self.cache.put(key, *coords, "remote"),
            Ok(None) => self.cache.put_negative(key),
            Err(_) => {}
        }

        if let Some(gate) = self.inflight.lock().await.remove(key) {
            gate.add_permits(Semaphore::MAX_PERMITS / 2);
        }

        match outcome {
            Ok(found) => Ok(found),
            Err(e) => Err(ResolveError::GeocoderFailure {
                name: query.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGeocoder {
        calls: AtomicUsize,
        answer: Option<Coordinates>,
    }

    #[async_trait::async_trait]
    impl RemoteGeocoder for CountingGeocoder {
        async fn lookup(
            &self,
            _name: &str,
            _hint: Option<&str>,
        ) -> Result<Option<Coordinates>, crate::error::GeocoderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    struct FailingGeocoder;

    #[async_trait::async_trait]
    impl RemoteGeocoder for FailingGeocoder {
        async fn lookup(
            &self,
            _name: &str,
            _hint: Option<&str>,
        ) -> Result<Option<Coordinates>, crate::error::GeocoderError> {
            Err(crate::error::GeocoderError::Status(503))
        }
    }

    fn offline() -> GazetteerService {
        GazetteerService::offline(GeocodeCache::memory())
    }

    #[tokio::test]
    async fn static_tier_exact() {
        let g = offline();
        let r = g.resolve("Київ", None).await.unwrap();
        assert_eq!(r.canonical, "київ");
        assert_eq!(r.tier, "static");
        assert!(!r.low_confidence);
    }

    #[tokio::test]
    async fn morphological_tier() {
        let g = offline();
        let r = g.resolve("Борзну", None).await.unwrap();
        assert_eq!(r.canonical, "борзна");
        assert_eq!(r.tier, "morph");

        let r = g.resolve("м. Полтаву", None).await.unwrap();
        assert_eq!(r.canonical, "полтава");
    }

    #[tokio::test]
    async fn trailing_words_are_shed() {
        let g = offline();
        let r = g.resolve("київ зараз", None).await.unwrap();
        assert_eq!(r.canonical, "київ");

        let r = g.resolve("білу церкву і околиці", None).await.unwrap();
        assert_eq!(r.canonical, "біла церква");
    }

    #[tokio::test]
    async fn raion_and_oblast_tiers() {
        let g = offline();
        let r = g.resolve("вишгородський район", None).await.unwrap();
        assert_eq!(r.kind, PlaceKind::Raion);

        let r = g.resolve("Сумщина", None).await.unwrap();
        assert_eq!(r.kind, PlaceKind::Oblast);
        assert_eq!(r.canonical, "сумська");
        assert!(r.low_confidence);
    }

    #[tokio::test]
    async fn ambiguous_name_prefers_hint_oblast() {
        let g = offline();
        let r = g.resolve("золочів", Some("харківщина")).await.unwrap();
        assert!((r.coords.lat - 50.2790).abs() < 1e-6);
        assert!(!r.low_confidence);

        let r = g.resolve("золочів", None).await.unwrap();
        assert!((r.coords.lat - 49.8052).abs() < 1e-6);
        assert!(r.low_confidence);
    }

    #[tokio::test]
    async fn cached_name_skips_remote() {
        let remote = Arc::new(CountingGeocoder {
            calls: AtomicUsize::new(0),
            answer: Some(Coordinates::new(50.0, 33.0)),
        });
        let cache = GeocodeCache::memory();
        cache.put(&GeocodeCache::key("десь", None), Coordinates::new(50.1, 33.1), "remote");
        let g = GazetteerService::new(cache, Some(remote.clone()));

        let r = g.resolve("десь", None).await.unwrap();
        assert_eq!(r.tier, "cache");
        assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn remote_called_once_then_cached() {
        let remote = Arc::new(CountingGeocoder {
            calls: AtomicUsize::new(0),
            answer: Some(Coordinates::new(50.2, 33.2)),
        });
        let g = GazetteerService::new(GeocodeCache::memory(), Some(remote.clone()));

        let first = g.resolve("хутір-михайлівський", None).await.unwrap();
        assert_eq!(first.tier, "remote");
        let second = g.resolve("хутір-михайлівський", None).await.unwrap();
        assert_eq!(second.tier, "cache");
        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn remote_failure_degrades_to_hint_centroid() {
        let g = GazetteerService::new(GeocodeCache::memory(), Some(Arc::new(FailingGeocoder)));
        let r = g.resolve("невідоме село", Some("сумщина")).await.unwrap();
        assert_eq!(r.tier, "hint-centroid");
        assert!(r.low_confidence);
        assert!((r.coords.lat - 50.9077).abs() < 1e-6);
    }

    #[tokio::test]
    async fn unknown_without_hint_is_not_found() {
        let g = offline();
        let err = g.resolve("абракадабра", None).await.unwrap_err();
        assert!(matches!(err, ResolveError::NotFound(_)));
    }
}
