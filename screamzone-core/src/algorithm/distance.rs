use crate::model::GeoPoint;
use rayon::prelude::*;

/// spherical earth radius used for all distance computations.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// great-circle distance in meters between two points via the haversine formula.
/// the intermediate term is clamped to [0,1] so rounding near antipodal points
/// cannot produce NaN.
pub fn haversine_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.clamp(0.0, 1.0).sqrt().asin()
}

/// distance from `reference` to each candidate, in candidate order. every entry
/// equals `haversine_meters(reference, candidate)` exactly.
pub fn distances_from(reference: &GeoPoint, candidates: &[GeoPoint], parallelize: bool) -> Vec<f64> {
    if parallelize {
        candidates
            .par_iter()
            .map(|c| haversine_meters(reference, c))
            .collect()
    } else {
        candidates
            .iter()
            .map(|c| haversine_meters(reference, c))
            .collect()
    }
}
