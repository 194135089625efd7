//! Report rendering for run summaries.

pub mod json;
pub mod text;

pub use json::render_json_report;
pub use text::{format_detailed_report, format_report};
