mod classification_rule;
mod rule_set;
mod tag_predicate;

pub use classification_rule::ClassificationRule;
pub use rule_set::RuleSet;
pub use tag_predicate::TagPredicate;

use crate::model::{Classification, GeoPoint, TagSet, ZoneRecord};
use rayon::prelude::*;

/// labels a batch of tag sets. the output is positional: `result[i]` is the
/// label of `tag_sets[i]` whether or not the work was parallelized.
pub fn classify_all(tag_sets: &[TagSet], rule_set: &RuleSet, parallelize: bool) -> Vec<Classification> {
    if parallelize {
        tag_sets.par_iter().map(|t| rule_set.classify(t)).collect()
    } else {
        tag_sets.iter().map(|t| rule_set.classify(t)).collect()
    }
}

/// builds classified [`ZoneRecord`]s from located tag sets, preserving input order.
pub fn build_records(
    rows: Vec<(GeoPoint, TagSet)>,
    rule_set: &RuleSet,
    parallelize: bool,
) -> Vec<ZoneRecord> {
    if parallelize {
        rows.into_par_iter()
            .map(|(point, tags)| ZoneRecord::new(point, tags, rule_set))
            .collect()
    } else {
        rows.into_iter()
            .map(|(point, tags)| ZoneRecord::new(point, tags, rule_set))
            .collect()
    }
}
