use super::FinderCliError;
use crate::{
    config::FinderConfiguration,
    dataset::{self, LocatedRows},
};
use screamzone_core::{
    algorithm::{classifier, ProximityFilter},
    model::{GeoPoint, ProximityResult, ZoneRecord},
};
use std::{num::NonZeroUsize, path::Path};

/// how a search selects zones around the reference location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchMode {
    /// every zone within this many meters
    WithinRadius(f64),
    /// the closest zones, at most this many
    Nearest(NonZeroUsize),
}

/// picks the location a search is centred on. a user location needs both
/// coordinates; without either one the configured fallback is used.
pub fn resolve_reference(
    lat: Option<f64>,
    lon: Option<f64>,
    fallback: Option<GeoPoint>,
) -> Result<Option<GeoPoint>, FinderCliError> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Some(GeoPoint::new(lat, lon)?)),
        (None, None) => {
            if let Some(f) = &fallback {
                log::info!("no location provided, using fallback location {f}");
            }
            Ok(fallback)
        }
        (Some(_), None) => Err(FinderCliError::ConfigurationError(String::from(
            "latitude provided without longitude",
        ))),
        (None, Some(_)) => Err(FinderCliError::ConfigurationError(String::from(
            "longitude provided without latitude",
        ))),
    }
}

/// reads, validates and classifies every record of a dataset file.
pub fn load_zone_records(
    dataset_file: &Path,
    conf: &FinderConfiguration,
) -> Result<Vec<ZoneRecord>, FinderCliError> {
    let raw = dataset::read_dataset(dataset_file)?;
    let located = dataset::locate_records(raw, conf.ignore_invalid_records)?;
    classify_rows(located, conf)
}

pub fn classify_rows(
    located: LocatedRows,
    conf: &FinderConfiguration,
) -> Result<Vec<ZoneRecord>, FinderCliError> {
    let rule_set = conf.rule_set.build()?;
    log::info!(
        "classifying {} records with {} rules",
        located.rows.len(),
        rule_set.rules().len()
    );
    for rule in rule_set.rules() {
        log::debug!("rule {rule}");
    }
    Ok(classifier::build_records(
        located.rows,
        &rule_set,
        conf.parallelize,
    ))
}

/// keeps the zones that qualify for reporting and orders them by distance
/// from the reference location. the records are consumed.
pub fn search(
    records: Vec<ZoneRecord>,
    reference: Option<GeoPoint>,
    mode: SearchMode,
    conf: &FinderConfiguration,
) -> Result<Vec<ProximityResult>, FinderCliError> {
    let filter = ProximityFilter::new(reference)?.with_parallelism(conf.parallelize);
    let total = records.len();
    let candidates: Vec<ZoneRecord> = if conf.favorable_only {
        records
            .into_iter()
            .filter(|r| r.label().is_favorable())
            .collect()
    } else {
        records
    };
    log::info!(
        "searching {} of {} zones around {}",
        candidates.len(),
        total,
        filter.reference()
    );
    let results = match mode {
        SearchMode::WithinRadius(radius) => filter.within_radius(candidates, radius)?,
        SearchMode::Nearest(k) => filter.top_k(candidates, k),
    };
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use screamzone_core::model::{Classification, TagSet};

    const METER_LAT: f64 = 1.0 / 111_194.93;

    fn located(rows: &[(f64, f64, &str, &str)]) -> LocatedRows {
        let rows = rows
            .iter()
            .map(|(lat, lon, k, v)| {
                let tags: TagSet = [(*k, *v)].into_iter().collect();
                (GeoPoint::new(*lat, *lon).unwrap(), tags)
            })
            .collect();
        LocatedRows {
            rows,
            ..Default::default()
        }
    }

    fn scenario() -> Vec<ZoneRecord> {
        let rows = located(&[
            (51.0 + 50.0 * METER_LAT, 4.0, "building", "yes"),
            (51.0 + 200.0 * METER_LAT, 4.0, "natural", "wood"),
            (51.0 + 1000.0 * METER_LAT, 4.0, "landuse", "industrial"),
        ]);
        classify_rows(rows, &FinderConfiguration::default()).unwrap()
    }

    #[test]
    fn test_resolve_reference() {
        let fallback = GeoPoint::new(51.2194, 4.4025).ok();
        let user = resolve_reference(Some(51.0), Some(4.0), fallback).unwrap();
        assert_eq!(user, GeoPoint::new(51.0, 4.0).ok());
        let fb = resolve_reference(None, None, fallback).unwrap();
        assert_eq!(fb, fallback);
        assert_eq!(resolve_reference(None, None, None).unwrap(), None);
        assert!(resolve_reference(Some(51.0), None, fallback).is_err());
        assert!(resolve_reference(None, Some(4.0), fallback).is_err());
        assert!(resolve_reference(Some(91.0), Some(4.0), fallback).is_err());
    }

    #[test]
    fn test_classify_rows() {
        let labels: Vec<Classification> = scenario().iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec![
                Classification::UnsuitableBuilt,
                Classification::Natural,
                Classification::Industrial
            ]
        );
    }

    #[test]
    fn test_search_favorable_within_radius() {
        let records = scenario();
        let reference = GeoPoint::new(51.0, 4.0).ok();
        let conf = FinderConfiguration::default();
        let results = search(records, reference, SearchMode::WithinRadius(500.0), &conf).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record().label(), Classification::Natural);
        assert!((results[0].distance_meters() - 200.0).abs() < 1.0);
    }

    #[test]
    fn test_search_all_labels_within_radius() {
        let records = scenario();
        let reference = GeoPoint::new(51.0, 4.0).ok();
        let conf = FinderConfiguration {
            favorable_only: false,
            ..Default::default()
        };
        let results = search(records, reference, SearchMode::WithinRadius(500.0), &conf).unwrap();
        let labels: Vec<Classification> = results.iter().map(|r| r.record().label()).collect();
        assert_eq!(
            labels,
            vec![Classification::UnsuitableBuilt, Classification::Natural]
        );
    }

    #[test]
    fn test_search_nearest() {
        let records = scenario();
        let reference = GeoPoint::new(51.0, 4.0).ok();
        let conf = FinderConfiguration {
            favorable_only: false,
            ..Default::default()
        };
        let k = NonZeroUsize::new(2).unwrap();
        let results = search(records, reference, SearchMode::Nearest(k), &conf).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].distance_meters() <= results[1].distance_meters());
    }

    #[test]
    fn test_search_without_reference() {
        let records = scenario();
        let conf = FinderConfiguration::default();
        let result = search(records, None, SearchMode::WithinRadius(500.0), &conf);
        assert!(matches!(result, Err(FinderCliError::ZoneError { .. })));
    }
}
