use super::RuleSetConfig;
use crate::app::FinderCliError;
use screamzone_core::model::{BoundingBox, GeoPoint};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// defines behaviors for a scream-zone search. every field has a default, so a
/// configuration file only needs the values it changes.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct FinderConfiguration {
    pub rule_set: RuleSetConfig,
    pub search_radius_meters: f64,
    /// how many zones a nearest-zones query returns
    pub nearest_count: NonZeroUsize,
    /// report only zones whose classification is favorable
    pub favorable_only: bool,
    /// substituted when the user does not provide a location
    pub fallback_location: Option<GeoPoint>,
    /// area in which submitted locations are accepted
    pub suggestion_bounds: Option<BoundingBox>,
    pub ignore_invalid_records: bool,
    pub parallelize: bool,
}

impl FinderConfiguration {
    pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 500.0;
    pub const DEFAULT_NEAREST_COUNT: usize = 3;

    /// reads the configuration file if one is given, otherwise uses defaults.
    pub fn load(configuration_file: Option<&String>) -> Result<FinderConfiguration, FinderCliError> {
        match configuration_file {
            None => Ok(FinderConfiguration::default()),
            Some(f) => {
                log::info!("reading screamzone configuration from {f}");
                FinderConfiguration::try_from(f)
            }
        }
    }
}

impl Default for FinderConfiguration {
    fn default() -> Self {
        Self {
            rule_set: RuleSetConfig::default(),
            search_radius_meters: Self::DEFAULT_SEARCH_RADIUS_METERS,
            nearest_count: NonZeroUsize::new(Self::DEFAULT_NEAREST_COUNT)
                .unwrap_or(NonZeroUsize::MIN),
            favorable_only: true,
            // Antwerp city centre
            fallback_location: GeoPoint::new(51.2194, 4.4025).ok(),
            suggestion_bounds: BoundingBox::new(51.15, 51.30, 4.25, 4.52).ok(),
            ignore_invalid_records: false,
            parallelize: true,
        }
    }
}

impl TryFrom<&String> for FinderConfiguration {
    type Error = FinderCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: FinderConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FinderCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                FinderCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FinderCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                FinderCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(FinderCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}

impl FinderConfiguration {
    fn validate(&self) -> Result<(), FinderCliError> {
        let r = self.search_radius_meters;
        if !r.is_finite() || r < 0.0 {
            return Err(FinderCliError::ConfigurationError(format!(
                "search_radius_meters must be a non-negative number, found {r}"
            )));
        }
        self.rule_set.build().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screamzone_core::model::{Classification, TagSet};

    #[test]
    fn test_defaults() {
        let conf = FinderConfiguration::default();
        assert_eq!(conf.search_radius_meters, 500.0);
        assert_eq!(conf.nearest_count.get(), 3);
        assert!(conf.favorable_only);
        assert_eq!(conf.rule_set, RuleSetConfig::Standard);
        let fallback = conf.fallback_location.unwrap();
        assert_eq!((fallback.lat(), fallback.lon()), (51.2194, 4.4025));
        let bounds = conf.suggestion_bounds.unwrap();
        assert!(bounds.contains(&fallback));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let src = r#"
            search_radius_meters = 1200.0
            favorable_only = false
            rule_set = { type = "extended" }
        "#;
        let conf: FinderConfiguration = toml::from_str(src).unwrap();
        assert_eq!(conf.search_radius_meters, 1200.0);
        assert!(!conf.favorable_only);
        assert_eq!(conf.rule_set, RuleSetConfig::Extended);
        assert_eq!(conf.nearest_count.get(), 3);
        assert!(conf.parallelize);
    }

    #[test]
    fn test_custom_rules_and_bounds_from_toml() {
        let src = r#"
            fallback_location = { lat = 50.8467, lon = 4.3525 }
            suggestion_bounds = { lat_min = 50.79, lat_max = 50.91, lon_min = 4.24, lon_max = 4.48 }

            [rule_set]
            type = "custom"

            [[rule_set.rules]]
            name = "parks"
            label = "natural"
            predicate = { type = "tag_value_in", key = "leisure", values = ["park"] }
        "#;
        let conf: FinderConfiguration = toml::from_str(src).unwrap();
        let rules = conf.rule_set.build().unwrap();
        let park: TagSet = [("leisure", "park")].into_iter().collect();
        assert_eq!(rules.classify(&park), Classification::Natural);
        let brussels = conf.fallback_location.unwrap();
        assert!(conf.suggestion_bounds.unwrap().contains(&brussels));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_count: Result<FinderConfiguration, _> = toml::from_str("nearest_count = 0");
        assert!(zero_count.is_err());
        let bad_bounds: Result<FinderConfiguration, _> = toml::from_str(
            "suggestion_bounds = { lat_min = 52.0, lat_max = 51.0, lon_min = 4.0, lon_max = 5.0 }",
        );
        assert!(bad_bounds.is_err());
        let empty_custom = RuleSetConfig::Custom { rules: vec![] };
        assert!(empty_custom.build().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = FinderConfiguration::try_from(&String::from("screamzone.yaml"));
        match result {
            Err(FinderCliError::ConfigurationError(msg)) => {
                assert!(msg.contains("unsupported file type"))
            }
            other => panic!("expected configuration error, found {other:?}"),
        }
    }
}
