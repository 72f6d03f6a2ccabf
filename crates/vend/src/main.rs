//! Vend - sales analytics engine
//!
//! # Usage
//!
//! ```bash
//! # KPI snapshot, filtered vs overall
//! vend summary --range 2024-01-01,2024-03-31 --segment Consumer --region East
//!
//! # Trend, grouped summaries, leaderboards
//! vend trend --granularity monthly
//! vend groups --by region
//! vend top --limit 10
//! vend breakdown
//!
//! # Full render model for a view refresh
//! vend report > view.json
//!
//! # Export the filtered view
//! vend export --output filtered.csv
//!
//! # Operator feedback
//! vend feedback add "love the new trend chart"
//! vend feedback list
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vend_config::{Config, LogFormat};

/// Vend - sales analytics engine
#[derive(Parser, Debug)]
#[command(name = "vend")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// KPI snapshot, filtered vs overall
    Summary(cmd::summary::SummaryArgs),

    /// Sales and profit trend over time
    Trend(cmd::trend::TrendArgs),

    /// Most profitable products
    Top(cmd::top::TopArgs),

    /// Grouped summary by a dimension
    Groups(cmd::groups::GroupsArgs),

    /// Sales per segment and category pair
    Breakdown(cmd::breakdown::BreakdownArgs),

    /// Full render model as JSON
    Report(cmd::report::ReportArgs),

    /// Export the filtered view as CSV
    Export(cmd::export::ExportArgs),

    /// Record or list operator feedback
    Feedback(cmd::feedback::FeedbackArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // CLI flag > config file > default "info"
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log.level.as_str().to_string());
    init_logging(&log_level, config.log.format)?;

    match cli.command {
        Command::Summary(args) => cmd::summary::run(args, &config),
        Command::Trend(args) => cmd::trend::run(args, &config),
        Command::Top(args) => cmd::top::run(args, &config),
        Command::Groups(args) => cmd::groups::run(args, &config),
        Command::Breakdown(args) => cmd::breakdown::run(args, &config),
        Command::Report(args) => cmd::report::run(args, &config),
        Command::Export(args) => cmd::export::run(args, &config),
        Command::Feedback(args) => cmd::feedback::run(args, &config),
    }
}

/// Initialize the tracing subscriber for logging
///
/// Logs go to stderr so table/json/csv output on stdout stays parseable.
fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Console => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    Ok(())
}
