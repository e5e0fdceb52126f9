mod check_location_ops;
mod cli_coordinate;
mod finder_app;
mod finder_cli_error;
mod inspect_ops;
pub mod pipeline;
mod search_ops;

pub use finder_app::{ScreamZoneCliArguments, ScreamZoneOperation};
pub use finder_cli_error::FinderCliError;
