//! Parsing for feature-tracker statistics logs.

pub mod fields;
pub mod parse;
pub mod record;

pub use fields::{Field, FieldExtractor, extract_number};
pub use parse::{parse_log_file, parse_log_text};
pub use record::{LogRecord, RecordSeries};
