use screamzone_core::model::{BoundingBox, GeoPoint, ZoneError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading dataset {0}: {1}")]
    DatasetError(String, String),
    #[error("record {index} has an invalid location: {source}")]
    InvalidRecord { index: usize, source: ZoneError },
    #[error("failure writing to {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("location {point} lies outside the accepted area ({bounds})")]
    OutsideBounds { point: GeoPoint, bounds: BoundingBox },
    #[error("{source}")]
    ZoneError {
        #[from]
        source: ZoneError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
