pub mod app;
pub mod config;
pub mod dataset;
pub mod report;
