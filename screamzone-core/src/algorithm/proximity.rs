use super::distance;
use crate::model::{GeoPoint, ProximityResult, ZoneError, ZoneRecord};
use itertools::Itertools;
use std::num::NonZeroUsize;

/// selects and orders records by their distance to a reference location.
///
/// results are always sorted ascending by distance; records at equal distance
/// keep their input order. the selection methods take ownership of the records
/// and move the kept ones into the results. given the same records they
/// always return the same sequence.
#[derive(Debug, Clone)]
pub struct ProximityFilter {
    reference: GeoPoint,
    parallelize: bool,
}

impl ProximityFilter {
    /// creates a filter around the reference location.
    ///
    /// # Arguments
    ///
    /// * `reference` - the query location, if one is known
    ///
    /// # Returns
    ///
    /// the filter, or [`ZoneError::MissingReferenceLocation`] when no reference
    /// location was provided. substituting a default is up to the caller.
    pub fn new(reference: Option<GeoPoint>) -> Result<ProximityFilter, ZoneError> {
        let reference = reference.ok_or(ZoneError::MissingReferenceLocation)?;
        Ok(ProximityFilter {
            reference,
            parallelize: false,
        })
    }

    /// compute distances with rayon. ordering of the results is unaffected.
    pub fn with_parallelism(mut self, parallelize: bool) -> ProximityFilter {
        self.parallelize = parallelize;
        self
    }

    pub fn reference(&self) -> &GeoPoint {
        &self.reference
    }

    /// every record with its distance, nearest first.
    pub fn rank_all(&self, records: Vec<ZoneRecord>) -> Vec<ProximityResult> {
        self.ranked(records, |_| true)
    }

    /// records no farther than `radius_meters` from the reference, nearest first.
    pub fn within_radius(
        &self,
        records: Vec<ZoneRecord>,
        radius_meters: f64,
    ) -> Result<Vec<ProximityResult>, ZoneError> {
        if !radius_meters.is_finite() || radius_meters < 0.0 {
            return Err(ZoneError::InvalidRadius(radius_meters));
        }
        Ok(self.ranked(records, |d| d <= radius_meters))
    }

    /// the `k` nearest records, or all of them when fewer than `k` exist.
    pub fn top_k(&self, records: Vec<ZoneRecord>, k: NonZeroUsize) -> Vec<ProximityResult> {
        let mut ranked = self.rank_all(records);
        ranked.truncate(k.get());
        ranked
    }

    fn ranked(&self, records: Vec<ZoneRecord>, keep: impl Fn(f64) -> bool) -> Vec<ProximityResult> {
        let points = records.iter().map(|r| *r.point()).collect_vec();
        let distances = distance::distances_from(&self.reference, &points, self.parallelize);
        let mut results = records
            .into_iter()
            .zip(distances)
            .filter(|(_, d)| keep(*d))
            .map(|(r, d)| ProximityResult::new(r, d))
            .collect_vec();
        // stable sort, so ties stay in input order
        results.sort_by(|a, b| a.distance_meters().total_cmp(&b.distance_meters()));
        results
    }
}
