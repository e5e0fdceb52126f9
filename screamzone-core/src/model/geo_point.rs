use super::ZoneError;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a WGS84 latitude/longitude pair. the constructor rejects non-finite and
/// out-of-range coordinates, so every [`GeoPoint`] in the system is safe to
/// hand to the distance functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLon", into = "LatLon")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<GeoPoint, ZoneError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ZoneError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ZoneError::InvalidLongitude(lon));
        }
        Ok(GeoPoint { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(value: GeoPoint) -> Self {
        Point::new(value.lon, value.lat)
    }
}

impl TryFrom<Point<f64>> for GeoPoint {
    type Error = ZoneError;

    fn try_from(value: Point<f64>) -> Result<Self, Self::Error> {
        GeoPoint::new(value.y(), value.x())
    }
}

/// serialized form of a [`GeoPoint`], checked on the way in.
#[derive(Serialize, Deserialize)]
struct LatLon {
    lat: f64,
    lon: f64,
}

impl TryFrom<LatLon> for GeoPoint {
    type Error = ZoneError;

    fn try_from(value: LatLon) -> Result<Self, Self::Error> {
        GeoPoint::new(value.lat, value.lon)
    }
}

impl From<GeoPoint> for LatLon {
    fn from(value: GeoPoint) -> Self {
        LatLon {
            lat: value.lat,
            lon: value.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_extremes() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            GeoPoint::new(90.5, 4.4),
            Err(ZoneError::InvalidLatitude(90.5))
        );
        assert_eq!(
            GeoPoint::new(51.2, -180.1),
            Err(ZoneError::InvalidLongitude(-180.1))
        );
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_geo_point_axis_order() {
        let p = GeoPoint::new(51.2175, 4.4214).unwrap();
        let gp: Point<f64> = p.into();
        assert_eq!(gp.x(), 4.4214);
        assert_eq!(gp.y(), 51.2175);
        assert_eq!(GeoPoint::try_from(gp).unwrap(), p);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: GeoPoint = serde_json::from_str(r#"{"lat": 51.2194, "lon": 4.4025}"#).unwrap();
        assert_eq!(ok.lat(), 51.2194);
        let bad: Result<GeoPoint, _> = serde_json::from_str(r#"{"lat": 151.0, "lon": 4.4}"#);
        assert!(bad.is_err());
    }
}
