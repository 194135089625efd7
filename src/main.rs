use clap::{Parser, Subcommand};
use std::path::PathBuf;
use track_stats::{OutputFormat, RunConfig};
use tracing_subscriber::EnvFilter;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "track-stats")]
#[command(about = "Feature tracker log statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print runtime, fps and lost features per frame for one or more tracker logs.
    Report {
        /// Tracker log file (repeatable).
        #[arg(long, required = true)]
        log: Vec<PathBuf>,

        /// Directory prepended to relative --log paths.
        #[arg(long)]
        dir: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also print prediction success and feature track rates.
        #[arg(long)]
        detailed: bool,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            log,
            dir,
            format,
            detailed,
        } => {
            let cfg = RunConfig {
                dir,
                logs: log,
                format,
                detailed,
            };
            track_stats::run_report(&cfg, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
