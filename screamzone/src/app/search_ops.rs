use super::{
    pipeline::{self, SearchMode},
    FinderCliError,
};
use crate::{config::FinderConfiguration, report};
use std::path::Path;

/// loads and classifies the dataset, finds the zones around the resolved
/// location and writes them as a CSV report.
pub fn run_search(
    dataset_file: &Path,
    lat: Option<f64>,
    lon: Option<f64>,
    mode: SearchMode,
    conf: &FinderConfiguration,
    output_file: Option<&Path>,
) -> Result<(), FinderCliError> {
    let reference = pipeline::resolve_reference(lat, lon, conf.fallback_location)?;
    let records = pipeline::load_zone_records(dataset_file, conf)?;
    report::log_label_summary(&records);
    let results = pipeline::search(records, reference, mode, conf)?;
    match mode {
        SearchMode::WithinRadius(r) => {
            log::info!("found {} zones within {r} meters", results.len())
        }
        SearchMode::Nearest(k) => log::info!("found {} of {k} nearest zones", results.len()),
    }
    report::write_report_to(output_file, &results)
}
