pub mod classifier;
pub mod distance;
pub mod proximity;
pub mod tag_normalizer;

pub use proximity::ProximityFilter;
