use super::{Classification, GeoPoint, TagSet};
use crate::algorithm::classifier::RuleSet;
use serde::Serialize;

/// a classified point. the label is computed once, when the record is built,
/// and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneRecord {
    point: GeoPoint,
    tags: TagSet,
    label: Classification,
}

impl ZoneRecord {
    pub fn new(point: GeoPoint, tags: TagSet, rule_set: &RuleSet) -> ZoneRecord {
        let label = rule_set.classify(&tags);
        ZoneRecord { point, tags, label }
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn label(&self) -> Classification {
        self.label
    }
}
