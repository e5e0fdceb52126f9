mod nearby_zone_row;
mod report_writer;
mod tag_summary;

pub use nearby_zone_row::NearbyZoneRow;
pub use report_writer::{log_label_summary, write_report, write_report_to};
pub use tag_summary::{label_counts, most_common_keys, rule_hits};
