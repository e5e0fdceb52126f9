use super::{raw_record::RawCsvRow, DatasetFormat, RawRecord};
use crate::app::FinderCliError;
use kdam::tqdm;
use screamzone_core::{
    algorithm::tag_normalizer,
    model::{GeoPoint, TagSet},
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// reads every raw record from a dataset file, choosing the parser by extension.
pub fn read_dataset(path: &Path) -> Result<Vec<RawRecord>, FinderCliError> {
    let format = DatasetFormat::from_path(path)?;
    let file = File::open(path).map_err(|e| {
        FinderCliError::DatasetError(path.display().to_string(), e.to_string())
    })?;
    log::info!("reading {} dataset {}", format, path.display());
    read_raw_records(BufReader::new(file), format)
        .map_err(|e| FinderCliError::DatasetError(path.display().to_string(), e))
}

/// decodes raw records from any reader. errors are reported as messages that
/// name the offending row so the caller can attach the source name.
pub fn read_raw_records<R: Read>(reader: R, format: DatasetFormat) -> Result<Vec<RawRecord>, String> {
    match format {
        DatasetFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .from_reader(reader);
            csv_reader
                .deserialize::<RawCsvRow>()
                .enumerate()
                .map(|(idx, row)| {
                    row.map(RawRecord::from)
                        .map_err(|e| format!("csv row {idx}: {e}"))
                })
                .collect()
        }
        DatasetFormat::JsonLines => {
            let mut records = vec![];
            for (idx, line) in BufReader::new(reader).lines().enumerate() {
                let line = line.map_err(|e| format!("line {}: {e}", idx + 1))?;
                if line.trim().is_empty() {
                    continue;
                }
                let record = serde_json::from_str::<RawRecord>(&line)
                    .map_err(|e| format!("line {}: {e}", idx + 1))?;
                records.push(record);
            }
            Ok(records)
        }
        DatasetFormat::JsonArray => {
            serde_json::from_reader(reader).map_err(|e| format!("invalid json array: {e}"))
        }
    }
}

/// raw records turned into validated points with normalized tags, ready for
/// classification.
#[derive(Debug, Default)]
pub struct LocatedRows {
    pub rows: Vec<(GeoPoint, TagSet)>,
    /// records dropped because latitude or longitude was absent
    pub missing_location: usize,
    /// records dropped because the location was out of range
    pub invalid_location: usize,
}

/// validates coordinates and normalizes tags. records without both coordinates
/// are dropped. records with out-of-range coordinates fail the load unless
/// `ignore_invalid` is set, in which case they are dropped with a warning.
pub fn locate_records(
    records: Vec<RawRecord>,
    ignore_invalid: bool,
) -> Result<LocatedRows, FinderCliError> {
    let total = records.len();
    let mut located = LocatedRows::default();
    let iter = tqdm!(
        records.into_iter().enumerate(),
        total = total,
        desc = "normalize records"
    );
    for (index, record) in iter {
        let (lat, lon) = match (record.lat, record.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                log::debug!("record {index} has no location, dropped");
                located.missing_location += 1;
                continue;
            }
        };
        match GeoPoint::new(lat, lon) {
            Ok(point) => {
                let tags = tag_normalizer::normalize(&record.tags);
                located.rows.push((point, tags));
            }
            Err(e) if ignore_invalid => {
                log::warn!("record {index} ignored: {e}");
                located.invalid_location += 1;
            }
            Err(e) => return Err(FinderCliError::InvalidRecord { index, source: e }),
        }
    }
    eprintln!();
    log::info!(
        "located {} of {} records ({} without location, {} with invalid location)",
        located.rows.len(),
        total,
        located.missing_location,
        located.invalid_location
    );
    Ok(located)
}
