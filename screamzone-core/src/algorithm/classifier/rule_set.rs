use super::{ClassificationRule, TagPredicate};
use crate::model::{Classification, TagSet};
use serde::{Deserialize, Serialize};

/// tag keys referenced by the built-in rule chains.
mod keys {
    pub const BUILT: [&str; 3] = ["building", "addr:street", "addr:housenumber"];
    pub const TRAFFIC: [&str; 3] = ["highway", "railway", "amenity"];
    pub const DISQUALIFYING: [&str; 5] = ["building", "addr:street", "highway", "railway", "amenity"];
}

/// an ordered, first-match-wins list of [`ClassificationRule`]s. rule order is
/// the only tie-break: a tag set matching several rules gets the label of the
/// earliest one. when no rule matches, the label is [`RuleSet::FALLBACK_LABEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
}

impl RuleSet {
    pub const FALLBACK_LABEL: Classification = Classification::Uncertain;

    pub fn new(rules: Vec<ClassificationRule>) -> RuleSet {
        RuleSet { rules }
    }

    /// the rule chain used by default.
    pub fn standard() -> RuleSet {
        use Classification as C;
        RuleSet::new(vec![
            ClassificationRule::new("untagged", TagPredicate::Empty, C::Uncertain),
            ClassificationRule::new(
                "built",
                TagPredicate::any_key_present(&keys::BUILT),
                C::UnsuitableBuilt,
            ),
            ClassificationRule::new(
                "traffic",
                TagPredicate::any_key_present(&keys::TRAFFIC),
                C::UnsuitableTraffic,
            ),
            ClassificationRule::new(
                "industrial_landuse",
                TagPredicate::tag_value_in("landuse", &["industrial"]),
                C::Industrial,
            ),
            ClassificationRule::new(
                "natural_cover",
                TagPredicate::tag_value_in("natural", &["wood", "scrub", "heath"]),
                C::Natural,
            ),
            ClassificationRule::new(
                "secluded_service",
                TagPredicate::tag_value_in("service", &["alley", "industrial"]),
                C::Secluded,
            ),
            ClassificationRule::new(
                "no_activity",
                TagPredicate::no_key_present(&keys::DISQUALIFYING),
                C::Quiet,
            ),
        ])
    }

    /// [`RuleSet::standard`] widened with railway landuse, grassland, and
    /// parks or nature reserves as favorable features.
    pub fn extended() -> RuleSet {
        use Classification as C;
        RuleSet::new(vec![
            ClassificationRule::new("untagged", TagPredicate::Empty, C::Uncertain),
            ClassificationRule::new(
                "built",
                TagPredicate::any_key_present(&keys::BUILT),
                C::UnsuitableBuilt,
            ),
            ClassificationRule::new(
                "traffic",
                TagPredicate::any_key_present(&keys::TRAFFIC),
                C::UnsuitableTraffic,
            ),
            ClassificationRule::new(
                "industrial_landuse",
                TagPredicate::tag_value_in("landuse", &["industrial", "railway"]),
                C::Industrial,
            ),
            ClassificationRule::new(
                "natural_cover",
                TagPredicate::tag_value_in("natural", &["wood", "scrub", "heath", "grassland"]),
                C::Natural,
            ),
            ClassificationRule::new(
                "green_leisure",
                TagPredicate::tag_value_in("leisure", &["park", "nature_reserve"]),
                C::Natural,
            ),
            ClassificationRule::new(
                "secluded_service",
                TagPredicate::tag_value_in("service", &["alley", "industrial"]),
                C::Secluded,
            ),
            ClassificationRule::new(
                "no_activity",
                TagPredicate::no_key_present(&keys::DISQUALIFYING),
                C::Quiet,
            ),
        ])
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// the rule that decides the label for these tags, if any.
    pub fn first_match(&self, tags: &TagSet) -> Option<&ClassificationRule> {
        self.rules.iter().find(|rule| rule.matches(tags))
    }

    pub fn classify(&self, tags: &TagSet) -> Classification {
        self.first_match(tags)
            .map(|rule| rule.label)
            .unwrap_or(Self::FALLBACK_LABEL)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::standard()
    }
}
