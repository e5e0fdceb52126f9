use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoneError {
    #[error("latitude '{0}' is not a finite number in range [-90,90]")]
    InvalidLatitude(f64),
    #[error("longitude '{0}' is not a finite number in range [-180,180]")]
    InvalidLongitude(f64),
    #[error("invalid bounding box: {0}")]
    InvalidBoundingBox(String),
    #[error("search radius must be a finite, non-negative number of meters, found '{0}'")]
    InvalidRadius(f64),
    #[error("no reference location available")]
    MissingReferenceLocation,
}
