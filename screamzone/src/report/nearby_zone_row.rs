use screamzone_core::model::{Classification, Favorability, ProximityResult};
use serde::Serialize;

/// one line of a nearby-zones report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyZoneRow {
    pub lat: f64,
    pub lon: f64,
    pub label: Classification,
    pub favorability: Favorability,
    /// great-circle distance from the reference location
    pub distance_m: f64,
}

impl From<&ProximityResult> for NearbyZoneRow {
    fn from(result: &ProximityResult) -> Self {
        let record = result.record();
        let label = record.label();
        NearbyZoneRow {
            lat: record.point().lat(),
            lon: record.point().lon(),
            label,
            favorability: label.favorability(),
            distance_m: result.distance_meters(),
        }
    }
}
