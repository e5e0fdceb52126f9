use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// categorical outcome of the zone classifier. every record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// buildings or street addresses are tagged here
    UnsuitableBuilt,
    /// roads, railways or public amenities are tagged here
    UnsuitableTraffic,
    Industrial,
    Natural,
    Secluded,
    /// no sign of activity in the tags
    Quiet,
    Uncertain,
}

/// coarse grouping of [`Classification`] values so that report sinks can pick
/// colors or icons without re-deriving them from labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Favorability {
    Favorable,
    Unfavorable,
    Indeterminate,
}

impl Classification {
    pub const ALL: [Classification; 7] = [
        Classification::UnsuitableBuilt,
        Classification::UnsuitableTraffic,
        Classification::Industrial,
        Classification::Natural,
        Classification::Secluded,
        Classification::Quiet,
        Classification::Uncertain,
    ];

    pub fn favorability(&self) -> Favorability {
        use Classification as C;
        match self {
            C::Natural | C::Industrial | C::Secluded | C::Quiet => Favorability::Favorable,
            C::UnsuitableBuilt | C::UnsuitableTraffic => Favorability::Unfavorable,
            C::Uncertain => Favorability::Indeterminate,
        }
    }

    pub fn is_favorable(&self) -> bool {
        self.favorability() == Favorability::Favorable
    }

    /// stable identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        use Classification as C;
        match self {
            C::UnsuitableBuilt => "unsuitable_built",
            C::UnsuitableTraffic => "unsuitable_traffic",
            C::Industrial => "industrial",
            C::Natural => "natural",
            C::Secluded => "secluded",
            C::Quiet => "quiet",
            C::Uncertain => "uncertain",
        }
    }

    /// human-readable label for reports and popups.
    pub fn display_name(&self) -> &'static str {
        use Classification as C;
        match self {
            C::UnsuitableBuilt => "Unsuitable (built-up)",
            C::UnsuitableTraffic => "Unsuitable (traffic/amenities)",
            C::Industrial => "Scream zone (industrial area)",
            C::Natural => "Scream zone (nature area)",
            C::Secluded => "Scream zone (secluded)",
            C::Quiet => "Quiet spot (no visible activity)",
            C::Uncertain => "Uncertain",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("unknown classification '{s}'"))
    }
}

impl Favorability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Favorability::Favorable => "favorable",
            Favorability::Unfavorable => "unfavorable",
            Favorability::Indeterminate => "indeterminate",
        }
    }
}

impl Display for Favorability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorability_grouping() {
        use Classification as C;
        for c in [C::Natural, C::Industrial, C::Secluded, C::Quiet] {
            assert_eq!(c.favorability(), Favorability::Favorable, "{c}");
        }
        for c in [C::UnsuitableBuilt, C::UnsuitableTraffic] {
            assert_eq!(c.favorability(), Favorability::Unfavorable, "{c}");
        }
        assert_eq!(C::Uncertain.favorability(), Favorability::Indeterminate);
    }

    #[test]
    fn test_identifier_matches_serde() {
        for c in Classification::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
            assert_eq!(Classification::from_str(c.as_str()), Ok(c));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(Classification::from_str("forest").is_err());
    }

    #[test]
    fn test_display_names_are_distinct() {
        use itertools::Itertools;
        let names = Classification::ALL.map(|c| c.display_name());
        assert_eq!(names.iter().unique().count(), names.len());
        assert_eq!(
            Classification::Natural.display_name(),
            "Scream zone (nature area)"
        );
    }
}
