//! Run configuration: which logs to read and how to print them.

use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Output directory the tracker wrote its logs into.
    pub dir: Option<PathBuf>,
    pub logs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub detailed: bool,
}

impl RunConfig {
    /// Log paths with `dir` joined in front of relative entries.
    pub fn log_paths(&self) -> Vec<PathBuf> {
        self.logs
            .iter()
            .map(|log| match &self.dir {
                Some(dir) if log.is_relative() => dir.join(log),
                _ => log.clone(),
            })
            .collect()
    }
}
