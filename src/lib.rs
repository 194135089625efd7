//! Frame-rate and lost-feature statistics for feature-tracker logs.

pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod render;
pub mod report;

pub use config::{OutputFormat, RunConfig};
pub use error::{Result, StatsError};
pub use log::extract_number;
pub use model::{QualityStats, RunSummary, process_file, summarize};
pub use render::{format_detailed_report, format_report, render_json_report};
pub use report::run_report;
