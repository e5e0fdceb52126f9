use super::ZoneRecord;
use serde::Serialize;

/// a record paired with its great-circle distance to the query's reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityResult {
    record: ZoneRecord,
    distance_meters: f64,
}

impl ProximityResult {
    pub(crate) fn new(record: ZoneRecord, distance_meters: f64) -> ProximityResult {
        ProximityResult {
            record,
            distance_meters,
        }
    }

    pub fn record(&self) -> &ZoneRecord {
        &self.record
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }
}
