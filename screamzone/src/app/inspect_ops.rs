use super::{pipeline, FinderCliError};
use crate::{config::FinderConfiguration, report};
use std::path::Path;

/// prints the most frequent tag keys, the label breakdown, and how many
/// records each classification rule decided.
pub fn run_inspect(
    dataset_file: &Path,
    top: usize,
    conf: &FinderConfiguration,
) -> Result<(), FinderCliError> {
    let rule_set = conf.rule_set.build()?;
    let records = pipeline::load_zone_records(dataset_file, conf)?;
    println!("records: {}", records.len());
    println!();
    println!("most common tag keys:");
    let keys = report::most_common_keys(records.iter().map(|r| r.tags()), top);
    for (key, count) in keys {
        println!("  {key:<24} {count}");
    }
    println!();
    println!("labels:");
    for (label, count) in report::label_counts(&records) {
        println!(
            "  {:<20} {:<34} {count}",
            label.as_str(),
            label.display_name()
        );
    }
    println!();
    println!("rules:");
    for (rule, count) in report::rule_hits(&records, &rule_set) {
        println!("  {:<72} {count}", rule.to_string());
    }
    println!(
        "  {:<72} {}",
        "(no rule, fallback label)",
        records
            .iter()
            .filter(|r| rule_set.first_match(r.tags()).is_none())
            .count()
    );
    Ok(())
}
