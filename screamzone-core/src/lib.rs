//! pure transforms behind the Scream-Zone Finder: tag normalization, rule-based
//! zone classification, haversine distance and proximity filtering.
pub mod algorithm;
pub mod model;
