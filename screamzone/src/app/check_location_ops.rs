use super::FinderCliError;
use crate::config::FinderConfiguration;
use screamzone_core::model::GeoPoint;

/// confirms that a submitted location lies within the configured suggestion
/// area. nothing is stored.
pub fn run_check_location(
    lat: f64,
    lon: f64,
    conf: &FinderConfiguration,
) -> Result<(), FinderCliError> {
    let point = GeoPoint::new(lat, lon)?;
    let bounds = conf.suggestion_bounds.ok_or_else(|| {
        FinderCliError::ConfigurationError(String::from(
            "no suggestion_bounds configured to check against",
        ))
    })?;
    if bounds.contains(&point) {
        log::info!("location {point} lies within {bounds}");
        println!("accepted: {point}");
        Ok(())
    } else {
        Err(FinderCliError::OutsideBounds { point, bounds })
    }
}
