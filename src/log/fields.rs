use crate::error::{Result, StatsError};
use crate::log::record::LogRecord;
use regex::Regex;

/// Labeled numeric fields read from each tracker log line.
///
/// Example line:
/// T: 1403715283.362143, RefKey Num: 500, patchMatchPredict Num: 495, Geo. valid: 492, Pred. suc. rate: 99.3939%, ...
///
/// Fields after `Geo. valid` are present in the format but not consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    RefKeyNum,
    PatchMatchPredictNum,
    GeoValid,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Timestamp,
        Field::RefKeyNum,
        Field::PatchMatchPredictNum,
        Field::GeoValid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Timestamp => "T",
            Field::RefKeyNum => "RefKey Num",
            Field::PatchMatchPredictNum => "patchMatchPredict Num",
            Field::GeoValid => "Geo. valid",
        }
    }
}

/// Build the `<label>: <value>,` pattern. The label is matched literally
/// (the `.` in `Geo. valid` is not a wildcard).
fn label_pattern(label: &str) -> Result<Regex> {
    let re = Regex::new(&format!(r"{}: ([^,]*),", regex::escape(label)))?;
    Ok(re)
}

fn capture_number(re: &Regex, label: &str, line: &str) -> Result<f64> {
    let not_found = || StatsError::PatternNotFound {
        label: label.to_string(),
        line: line.to_string(),
        lineno: 0,
    };

    let value = re
        .captures(line)
        .and_then(|caps| caps.get(1))
        .ok_or_else(not_found)?
        .as_str()
        .trim();

    value.parse::<f64>().map_err(|_| not_found())
}

/// Parse the number following the first `"<label>: "` in `line`, up to the next comma.
pub fn extract_number(label: &str, line: &str) -> Result<f64> {
    let re = label_pattern(label)?;
    capture_number(&re, label, line)
}

/// Compiled patterns for every [`Field`], applied uniformly to each line.
#[derive(Debug)]
pub struct FieldExtractor {
    patterns: Vec<(Field, Regex)>,
}

impl FieldExtractor {
    pub fn new() -> Result<Self> {
        let patterns = Field::ALL
            .iter()
            .map(|&f| label_pattern(f.label()).map(|re| (f, re)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Extract all fields from one line. Fails on the first missing field.
    pub fn extract(&self, line: &str) -> Result<LogRecord> {
        let mut rec = LogRecord::default();
        for (field, re) in &self.patterns {
            let v = capture_number(re, field.label(), line)?;
            match field {
                Field::Timestamp => rec.timestamp = v,
                Field::RefKeyNum => rec.ref_key_num = v,
                Field::PatchMatchPredictNum => rec.patch_match_predict_num = v,
                Field::GeoValid => rec.geo_valid = v,
            }
        }
        Ok(rec)
    }
}
