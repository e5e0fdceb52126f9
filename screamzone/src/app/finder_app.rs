use super::{
    check_location_ops, cli_coordinate, inspect_ops, pipeline::SearchMode, search_ops,
    FinderCliError,
};
use crate::config::FinderConfiguration;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::{num::NonZeroUsize, path::Path};

/// command line tool for finding quiet, secluded places to scream near a location
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ScreamZoneCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: ScreamZoneOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ScreamZoneOperation {
    /// report every scream zone within a radius of a location
    Find {
        /// point dataset (.csv, .jsonl, .ndjson or .json) with lat, lon and tags
        dataset_file: String,
        /// latitude of the search location. uses the configured fallback when omitted
        #[arg(long, allow_hyphen_values = true, value_parser = cli_coordinate::parse_lat)]
        lat: Option<f64>,
        /// longitude of the search location. uses the configured fallback when omitted
        #[arg(long, allow_hyphen_values = true, value_parser = cli_coordinate::parse_lon)]
        lon: Option<f64>,
        /// search radius in meters, overrides the configuration file
        #[arg(short, long, value_parser = cli_coordinate::parse_radius)]
        radius: Option<f64>,
        /// include unsuitable and uncertain zones in the report
        #[arg(long)]
        all_labels: bool,
        /// TOML or JSON file with search settings
        #[arg(short, long)]
        configuration_file: Option<String>,
        /// CSV report destination, stdout when omitted
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// report the scream zones closest to a location
    Nearest {
        /// point dataset (.csv, .jsonl, .ndjson or .json) with lat, lon and tags
        dataset_file: String,
        #[arg(long, allow_hyphen_values = true, value_parser = cli_coordinate::parse_lat)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, value_parser = cli_coordinate::parse_lon)]
        lon: Option<f64>,
        /// number of zones to report, overrides the configuration file
        #[arg(short = 'k', long)]
        count: Option<NonZeroUsize>,
        #[arg(long)]
        all_labels: bool,
        #[arg(short, long)]
        configuration_file: Option<String>,
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// summarize the tags and labels found in a dataset
    Inspect {
        dataset_file: String,
        /// number of tag keys to list
        #[arg(short, long, default_value_t = 20)]
        top: usize,
        #[arg(short, long)]
        configuration_file: Option<String>,
    },
    /// test whether a location lies in the area accepted for suggestions
    CheckLocation {
        #[arg(long, allow_hyphen_values = true, value_parser = cli_coordinate::parse_lat)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true, value_parser = cli_coordinate::parse_lon)]
        lon: f64,
        #[arg(short, long)]
        configuration_file: Option<String>,
    },
}

impl ScreamZoneOperation {
    pub fn run(&self) -> Result<(), FinderCliError> {
        match self {
            ScreamZoneOperation::Find {
                dataset_file,
                lat,
                lon,
                radius,
                all_labels,
                configuration_file,
                output_file,
            } => {
                let conf = load_configuration(configuration_file.as_ref(), *all_labels)?;
                let mode = SearchMode::WithinRadius(radius.unwrap_or(conf.search_radius_meters));
                search_ops::run_search(
                    Path::new(dataset_file),
                    *lat,
                    *lon,
                    mode,
                    &conf,
                    output_file.as_ref().map(Path::new),
                )
            }
            ScreamZoneOperation::Nearest {
                dataset_file,
                lat,
                lon,
                count,
                all_labels,
                configuration_file,
                output_file,
            } => {
                let conf = load_configuration(configuration_file.as_ref(), *all_labels)?;
                let mode = SearchMode::Nearest(count.unwrap_or(conf.nearest_count));
                search_ops::run_search(
                    Path::new(dataset_file),
                    *lat,
                    *lon,
                    mode,
                    &conf,
                    output_file.as_ref().map(Path::new),
                )
            }
            ScreamZoneOperation::Inspect {
                dataset_file,
                top,
                configuration_file,
            } => {
                let conf = FinderConfiguration::load(configuration_file.as_ref())?;
                inspect_ops::run_inspect(Path::new(dataset_file), *top, &conf)
            }
            ScreamZoneOperation::CheckLocation {
                lat,
                lon,
                configuration_file,
            } => {
                let conf = FinderConfiguration::load(configuration_file.as_ref())?;
                check_location_ops::run_check_location(*lat, *lon, &conf)
            }
        }
    }
}

fn load_configuration(
    configuration_file: Option<&String>,
    all_labels: bool,
) -> Result<FinderConfiguration, FinderCliError> {
    let mut conf = FinderConfiguration::load(configuration_file)?;
    if all_labels {
        conf.favorable_only = false;
    }
    Ok(conf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_find() {
        let args = ScreamZoneCliArguments::try_parse_from([
            "screamzone",
            "find",
            "antwerp.csv",
            "--lat",
            "51.2175",
            "--lon",
            "-4.4214",
            "-r",
            "750",
        ])
        .unwrap();
        match args.op {
            ScreamZoneOperation::Find {
                lat,
                lon,
                radius,
                all_labels,
                ..
            } => {
                assert_eq!(lat, Some(51.2175));
                assert_eq!(lon, Some(-4.4214));
                assert_eq!(radius, Some(750.0));
                assert!(!all_labels);
            }
            _ => panic!("expected find"),
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let args = ScreamZoneCliArguments::try_parse_from([
            "screamzone",
            "check-location",
            "--lat",
            "95.0",
            "--lon",
            "4.4",
        ]);
        assert!(args.is_err());
        let zero_count = ScreamZoneCliArguments::try_parse_from([
            "screamzone",
            "nearest",
            "antwerp.csv",
            "-k",
            "0",
        ]);
        assert!(zero_count.is_err());
    }
}
