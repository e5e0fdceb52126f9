use crate::app::FinderCliError;
use screamzone_core::algorithm::classifier::{ClassificationRule, RuleSet};
use serde::{Deserialize, Serialize};

/// selects the classification rule chain for a run.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum RuleSetConfig {
    #[default]
    Standard,
    Extended,
    /// a fully user-supplied chain, evaluated top to bottom
    Custom { rules: Vec<ClassificationRule> },
}

impl RuleSetConfig {
    pub fn build(&self) -> Result<RuleSet, FinderCliError> {
        match self {
            RuleSetConfig::Standard => Ok(RuleSet::standard()),
            RuleSetConfig::Extended => Ok(RuleSet::extended()),
            RuleSetConfig::Custom { rules } if rules.is_empty() => Err(
                FinderCliError::ConfigurationError(String::from(
                    "custom rule set must contain at least one rule",
                )),
            ),
            RuleSetConfig::Custom { rules } => Ok(RuleSet::new(rules.clone())),
        }
    }
}
