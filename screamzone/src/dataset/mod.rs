mod dataset_format;
mod raw_record;
mod record_reader;

pub use dataset_format::DatasetFormat;
pub use raw_record::RawRecord;
pub use record_reader::{locate_records, read_dataset, read_raw_records, LocatedRows};
