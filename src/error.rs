//! Error kinds for log extraction and summary computation.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("cannot read log file {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pattern \"{label}: <value>,\" not found at line {lineno}: {line:?}")]
    PatternNotFound {
        label: String,
        line: String,
        /// 1-based; 0 when the line did not come from a file.
        lineno: usize,
    },

    #[error("insufficient data ({frames} frames): {reason}")]
    InsufficientData { frames: usize, reason: &'static str },

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;

impl StatsError {
    /// Attach the 1-based line number to a pattern error raised by `extract_number`.
    pub fn at_line(self, lineno: usize) -> Self {
        match self {
            Self::PatternNotFound { label, line, .. } => Self::PatternNotFound {
                label,
                line,
                lineno,
            },
            other => other,
        }
    }
}
