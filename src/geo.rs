//! Pure coordinate math: distances, bearings, point projection.
//!
//! Fully deterministic, no external state.

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude.
const KM_PER_DEG: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Ukraine's approximate bounding box, with a margin that covers the
/// near-border launch areas alert channels routinely reference.
pub fn is_within_ukraine(c: Coordinates) -> bool {
    (44.0..=53.0).contains(&c.lat) && (22.0..=41.0).contains(&c.lng)
}

/// Great-circle distance in kilometers.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing from `from` to `to`, degrees clockwise from north (0-360).
pub fn bearing_deg(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlng = (to.lng - from.lng).to_radians();

    let x = dlng.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Offset `start` by `distance_km` along `bearing` (degrees from north).
///
/// Equirectangular approximation: at the ~50 km scale of trajectory stubs
/// the error is negligible next to the heuristic distance itself.
pub fn destination_point(start: Coordinates, bearing: f64, distance_km: f64) -> Coordinates {
    let b = bearing.to_radians();
    let dlat = distance_km * b.cos() / KM_PER_DEG;
    let dlng = distance_km * b.sin() / (KM_PER_DEG * start.lat.to_radians().cos());
    Coordinates::new(start.lat + dlat, start.lng + dlng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_kyiv_lviv() {
        let kyiv = Coordinates::new(50.4501, 30.5234);
        let lviv = Coordinates::new(49.8397, 24.0297);
        let d = haversine_km(kyiv, lviv);
        assert!((d - 469.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn bearing_due_south() {
        let a = Coordinates::new(50.45, 30.52);
        let b = Coordinates::new(49.45, 30.52);
        let brg = bearing_deg(a, b);
        assert!((brg - 180.0).abs() < 0.5, "got {brg}");
    }

    #[test]
    fn destination_round_trips_distance_and_bearing() {
        let start = Coordinates::new(50.0, 30.0);
        for bearing in [0.0, 45.0, 135.0, 225.0, 310.0] {
            let end = destination_point(start, bearing, 50.0);
            let d = haversine_km(start, end);
            let b = bearing_deg(start, end);
            assert!((d - 50.0).abs() < 1.0, "distance {d} at bearing {bearing}");
            let diff = (b - bearing).abs().min(360.0 - (b - bearing).abs());
            assert!(diff < 5.0, "bearing {b} vs {bearing}");
        }
    }

    #[test]
    fn bounding_box() {
        assert!(is_within_ukraine(Coordinates::new(50.45, 30.52)));
        assert!(!is_within_ukraine(Coordinates::new(55.75, 37.61)));
    }
}
