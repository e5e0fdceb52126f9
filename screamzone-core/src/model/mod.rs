mod bounding_box;
mod classification;
mod geo_point;
mod proximity_result;
mod tag_set;
mod zone_error;
mod zone_record;

pub use bounding_box::BoundingBox;
pub use classification::{Classification, Favorability};
pub use geo_point::GeoPoint;
pub use proximity_result::ProximityResult;
pub use tag_set::TagSet;
pub use zone_error::ZoneError;
pub use zone_record::ZoneRecord;
