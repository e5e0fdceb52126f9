use super::TagPredicate;
use crate::model::{Classification, TagSet};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// one step of a classification chain: when the predicate holds, the record
/// receives the label and no later rule is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub name: String,
    pub predicate: TagPredicate,
    pub label: Classification,
}

impl ClassificationRule {
    pub fn new(name: &str, predicate: TagPredicate, label: Classification) -> ClassificationRule {
        ClassificationRule {
            name: String::from(name),
            predicate,
            label,
        }
    }

    pub fn matches(&self, tags: &TagSet) -> bool {
        self.predicate.test(tags)
    }
}

impl Display for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.predicate, self.label)
    }
}
