use super::{GeoPoint, ZoneError};
use geo::{coord, Rect};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an inclusive latitude/longitude range. used to decide whether a
/// user-submitted location lies inside the area covered by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundingBoxSerializable", into = "BoundingBoxSerializable")]
pub struct BoundingBox {
    rect: Rect<f64>,
}

impl BoundingBox {
    pub fn new(
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> Result<BoundingBox, ZoneError> {
        let min = GeoPoint::new(lat_min, lon_min)
            .map_err(|e| ZoneError::InvalidBoundingBox(format!("lower bound: {e}")))?;
        let max = GeoPoint::new(lat_max, lon_max)
            .map_err(|e| ZoneError::InvalidBoundingBox(format!("upper bound: {e}")))?;
        if lat_min > lat_max {
            return Err(ZoneError::InvalidBoundingBox(format!(
                "lat_min must not exceed lat_max, but found [{lat_min},{lat_max}]"
            )));
        }
        if lon_min > lon_max {
            return Err(ZoneError::InvalidBoundingBox(format!(
                "lon_min must not exceed lon_max, but found [{lon_min},{lon_max}]"
            )));
        }
        let rect = Rect::new(
            coord! { x: min.lon(), y: min.lat() },
            coord! { x: max.lon(), y: max.lat() },
        );
        Ok(BoundingBox { rect })
    }

    pub fn lat_min(&self) -> f64 {
        self.rect.min().y
    }

    pub fn lat_max(&self) -> f64 {
        self.rect.max().y
    }

    pub fn lon_min(&self) -> f64 {
        self.rect.min().x
    }

    pub fn lon_max(&self) -> f64 {
        self.rect.max().x
    }

    /// true when the point lies inside the box or on its edge.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let (min, max) = (self.rect.min(), self.rect.max());
        min.y <= point.lat() && point.lat() <= max.y && min.x <= point.lon() && point.lon() <= max.x
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{},{}], lon [{},{}]",
            self.lat_min(),
            self.lat_max(),
            self.lon_min(),
            self.lon_max()
        )
    }
}

#[derive(Serialize, Deserialize)]
struct BoundingBoxSerializable {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl TryFrom<BoundingBoxSerializable> for BoundingBox {
    type Error = ZoneError;

    fn try_from(b: BoundingBoxSerializable) -> Result<Self, Self::Error> {
        BoundingBox::new(b.lat_min, b.lat_max, b.lon_min, b.lon_max)
    }
}

impl From<BoundingBox> for BoundingBoxSerializable {
    fn from(b: BoundingBox) -> Self {
        BoundingBoxSerializable {
            lat_min: b.lat_min(),
            lat_max: b.lat_max(),
            lon_min: b.lon_min(),
            lon_max: b.lon_max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn antwerp() -> BoundingBox {
        BoundingBox::new(51.15, 51.30, 4.25, 4.52).unwrap()
    }

    #[test]
    fn test_contains_interior_and_edges() {
        let bbox = antwerp();
        assert!(bbox.contains(&GeoPoint::new(51.2194, 4.4025).unwrap()));
        assert!(bbox.contains(&GeoPoint::new(51.15, 4.25).unwrap()));
        assert!(bbox.contains(&GeoPoint::new(51.30, 4.52).unwrap()));
    }

    #[test]
    fn test_excludes_outside() {
        let bbox = antwerp();
        // Brussels
        assert!(!bbox.contains(&GeoPoint::new(50.8467, 4.3525).unwrap()));
        assert!(!bbox.contains(&GeoPoint::new(51.2, 4.53).unwrap()));
        assert!(!bbox.contains(&GeoPoint::new(51.3001, 4.4).unwrap()));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        match BoundingBox::new(51.3, 51.15, 4.25, 4.52) {
            Err(ZoneError::InvalidBoundingBox(msg)) => assert!(msg.contains("lat_min")),
            other => panic!("expected InvalidBoundingBox, found {other:?}"),
        }
        assert!(BoundingBox::new(51.15, 51.3, 4.52, 4.25).is_err());
        assert!(BoundingBox::new(-91.0, 51.3, 4.25, 4.52).is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(antwerp()).unwrap();
        assert_eq!(json["lat_min"], 51.15);
        assert_eq!(json["lon_max"], 4.52);
        let back: BoundingBox = serde_json::from_value(json).unwrap();
        assert_eq!(back, antwerp());
    }
}
