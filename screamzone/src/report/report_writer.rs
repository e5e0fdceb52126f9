use super::{label_counts, NearbyZoneRow};
use crate::app::FinderCliError;
use kdam::tqdm;
use screamzone_core::model::{ProximityResult, ZoneRecord};
use std::{io::Write, path::Path};

/// writes search results as CSV rows to any sink. `sink_name` is used only in
/// error messages. a header is written even when there are no results.
pub fn write_report<W: Write>(
    sink: W,
    sink_name: &str,
    results: &[ProximityResult],
) -> Result<(), FinderCliError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(sink);
    writer
        .write_record(["lat", "lon", "label", "favorability", "distance_m"])
        .map_err(|e| FinderCliError::CsvWriteError(sink_name.to_string(), e))?;
    let write_iter = tqdm!(
        results.iter(),
        desc = "writing nearby zones",
        total = results.len()
    );
    for result in write_iter {
        writer
            .serialize(NearbyZoneRow::from(result))
            .map_err(|e| FinderCliError::CsvWriteError(sink_name.to_string(), e))?;
    }
    eprintln!();
    writer.flush()?;
    Ok(())
}

/// writes the report to `output_file`, or to stdout when no file is given.
pub fn write_report_to(
    output_file: Option<&Path>,
    results: &[ProximityResult],
) -> Result<(), FinderCliError> {
    match output_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_report(file, &path.display().to_string(), results)?;
            log::info!("wrote {} nearby zones to {}", results.len(), path.display());
            Ok(())
        }
        None => write_report(std::io::stdout().lock(), "stdout", results),
    }
}

/// logs how many records fell under each label.
pub fn log_label_summary(records: &[ZoneRecord]) {
    for (label, count) in label_counts(records) {
        log::info!("{:>20}: {count}", label.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screamzone_core::{
        algorithm::{classifier::RuleSet, ProximityFilter},
        model::{GeoPoint, TagSet},
    };

    fn results() -> Vec<ProximityResult> {
        let rules = RuleSet::standard();
        let wood: TagSet = [("natural", "wood")].into_iter().collect();
        let alley: TagSet = [("service", "alley")].into_iter().collect();
        let records = vec![
            ZoneRecord::new(GeoPoint::new(51.0, 4.01).unwrap(), alley, &rules),
            ZoneRecord::new(GeoPoint::new(51.0, 4.0).unwrap(), wood, &rules),
        ];
        let filter = ProximityFilter::new(GeoPoint::new(51.0, 4.0).ok()).unwrap();
        filter.rank_all(records)
    }

    #[test]
    fn test_write_report() {
        let mut buffer: Vec<u8> = vec![];
        write_report(&mut buffer, "buffer", &results()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "lat,lon,label,favorability,distance_m");
        assert_eq!(lines[1], "51.0,4.0,natural,favorable,0.0");
        assert!(lines[2].starts_with("51.0,4.01,secluded,favorable,"));
    }

    #[test]
    fn test_write_empty_report() {
        let mut buffer: Vec<u8> = vec![];
        write_report(&mut buffer, "buffer", &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.trim_end(), "lat,lon,label,favorability,distance_m");
    }
}
