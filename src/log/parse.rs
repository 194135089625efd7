use crate::error::{Result, StatsError};
use crate::log::fields::FieldExtractor;
use crate::log::record::RecordSeries;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a tracker log file into per-field sequences.
///
/// Every line must carry all labeled fields; the first line that does not
/// aborts the parse and no partial series is returned.
pub fn parse_log_file(path: &Path) -> Result<RecordSeries> {
    let text = fs::read_to_string(path).map_err(|source| StatsError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read tracker log");

    let series = parse_log_text(&text)?;
    debug!(path = %path.display(), frames = series.len(), "parsed tracker log");
    Ok(series)
}

/// Parse log text already in memory. A blank line is a malformed record.
pub fn parse_log_text(text: &str) -> Result<RecordSeries> {
    let extractor = FieldExtractor::new()?;

    let mut out = RecordSeries::new();
    for (lineno, line) in text.lines().enumerate() {
        let rec = extractor.extract(line).map_err(|e| e.at_line(lineno + 1))?;
        out.push(rec);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_lines_in_file_order() {
        let text = "T: 100.0, RefKey Num: 500, patchMatchPredict Num: 495, Geo. valid: 490,\n\
                    T: 101.0, RefKey Num: 500, patchMatchPredict Num: 498, Geo. valid: 497,\n";
        let s = parse_log_text(text).unwrap();
        assert_eq!(s.times(), &[100.0, 101.0]);
        assert_eq!(s.lost_feats(), &[10.0, 3.0]);
    }

    #[test]
    fn blank_line_aborts_parse() {
        let text = "T: 100.0, RefKey Num: 500, patchMatchPredict Num: 495, Geo. valid: 490,\n\n\
                    T: 101.0, RefKey Num: 500, patchMatchPredict Num: 498, Geo. valid: 497,\n";
        match parse_log_text(text).unwrap_err() {
            StatsError::PatternNotFound { label, lineno, line } => {
                assert_eq!(label, "T");
                assert_eq!(lineno, 2);
                assert_eq!(line, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn trailing_newline_is_not_a_record() {
        let text = "T: 1.0, RefKey Num: 2, patchMatchPredict Num: 2, Geo. valid: 1,\n";
        assert_eq!(parse_log_text(text).unwrap().len(), 1);
    }

    #[test]
    fn bad_line_reports_its_line_number() {
        let text = "T: 1.0, RefKey Num: 2, patchMatchPredict Num: 2, Geo. valid: 1,\n\
                    T: 2.0, RefKey Num: 2, patchMatchPredict Num: 2,\n";
        match parse_log_text(text).unwrap_err() {
            StatsError::PatternNotFound { label, lineno, .. } => {
                assert_eq!(label, "Geo. valid");
                assert_eq!(lineno, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = parse_log_file(Path::new("/nonexistent/trackFeatures.txt")).unwrap_err();
        assert!(matches!(err, StatsError::FileNotFound { .. }));
    }
}
