use crate::model::TagSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a test over a [`TagSet`], the left-hand side of a classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TagPredicate {
    /// the feature carries no tags at all
    Empty,
    /// at least one of the keys is present, whatever its value
    AnyKeyPresent { keys: Vec<String> },
    /// none of the keys are present
    NoKeyPresent { keys: Vec<String> },
    /// the key is present and its value is one of the listed values
    TagValueIn { key: String, values: Vec<String> },
}

impl TagPredicate {
    pub fn any_key_present(keys: &[&str]) -> TagPredicate {
        TagPredicate::AnyKeyPresent {
            keys: to_owned(keys),
        }
    }

    pub fn no_key_present(keys: &[&str]) -> TagPredicate {
        TagPredicate::NoKeyPresent {
            keys: to_owned(keys),
        }
    }

    pub fn tag_value_in(key: &str, values: &[&str]) -> TagPredicate {
        TagPredicate::TagValueIn {
            key: String::from(key),
            values: to_owned(values),
        }
    }

    pub fn test(&self, tags: &TagSet) -> bool {
        match self {
            TagPredicate::Empty => tags.is_empty(),
            TagPredicate::AnyKeyPresent { keys } => keys.iter().any(|k| tags.contains_key(k)),
            TagPredicate::NoKeyPresent { keys } => !keys.iter().any(|k| tags.contains_key(k)),
            TagPredicate::TagValueIn { key, values } => match tags.get(key) {
                Some(value) => values.iter().any(|v| v == value),
                None => false,
            },
        }
    }
}

/// overpass-like notation, used in log messages.
impl Display for TagPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagPredicate::Empty => write!(f, "[]"),
            TagPredicate::AnyKeyPresent { keys } => {
                write!(f, "{}", keys.iter().map(|k| format!("['{k}']")).join("|"))
            }
            TagPredicate::NoKeyPresent { keys } => {
                write!(f, "{}", keys.iter().map(|k| format!("[!'{k}']")).join(""))
            }
            TagPredicate::TagValueIn { key, values } => {
                write!(f, "['{}'~'{}']", key, values.iter().join("|"))
            }
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| String::from(*v)).collect()
}
