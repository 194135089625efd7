//! Drive a configured run: summarize each log and write its report.

use crate::config::{OutputFormat, RunConfig};
use crate::model::process_file;
use crate::render::{format_detailed_report, format_report, render_json_report};
use anyhow::Context;
use std::io::Write;

/// Summarize every configured log in order and write the reports to `out`.
///
/// With more than one text report each is preceded by a `== <path> ==` header.
/// The first log that fails stops the run; reports already written stay in `out`.
pub fn run_report<W: Write>(cfg: &RunConfig, out: &mut W) -> anyhow::Result<()> {
    let paths = cfg.log_paths();
    let many = paths.len() > 1;

    for path in &paths {
        let summary =
            process_file(path).with_context(|| format!("summarize {}", path.display()))?;

        match cfg.format {
            OutputFormat::Text => {
                if many {
                    writeln!(out, "== {} ==", path.display())?;
                }
                let text = if cfg.detailed {
                    format_detailed_report(&summary)
                } else {
                    format_report(&summary)
                };
                writeln!(out, "{}", text)?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", render_json_report(path, &summary)?)?;
            }
        }
    }

    Ok(())
}
