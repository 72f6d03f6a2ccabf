//! Report command - full render model for one view refresh
//!
//! Emits everything a rendering collaborator consumes, as JSON: baseline and
//! filtered KPIs with deltas, the standard grouped summaries, and the trend
//! series.
//!
//! # Usage
//!
//! ```bash
//! vend report > view.json
//! vend report --granularity daily --top-products 5
//! ```

use anyhow::Result;
use clap::Args;
use vend_analytics::{Granularity, Report};
use vend_config::Config;

use crate::cmd::{FilterArgs, build_criteria, load_dataset};

/// Report command arguments
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Trend bucket width (daily, monthly). Defaults to the configured value.
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Length of the product leaderboard. Defaults to the configured value.
    #[arg(short, long)]
    pub top_products: Option<usize>,
}

/// Run the report command
pub fn run(args: ReportArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let criteria = build_criteria(&args.filter, &dataset)?;

    let granularity = Granularity::parse(
        args.granularity
            .as_deref()
            .unwrap_or(&config.report.granularity),
    )?;
    let top_products = args.top_products.unwrap_or(config.report.top_products);

    let report = Report::build(dataset.records(), &criteria, granularity, top_products)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
