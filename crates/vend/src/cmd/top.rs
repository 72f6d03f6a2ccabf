//! Top command - product leaderboard
//!
//! # Usage
//!
//! ```bash
//! vend top
//! vend top --limit 5 --measure sales
//! ```

use anyhow::Result;
use clap::Args;
use vend_analytics::{Dimension, Measure, apply, group_by, top};
use vend_config::Config;

use crate::cmd::{FilterArgs, build_criteria, load_dataset};

/// Top command arguments
#[derive(Args, Debug)]
pub struct TopArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of products. Defaults to the configured leaderboard length.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Measure to rank by (sales, profit)
    #[arg(short, long, default_value = "profit")]
    pub measure: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the top command
pub fn run(args: TopArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let criteria = build_criteria(&args.filter, &dataset)?;
    let measure = Measure::parse(&args.measure)?;
    let limit = args.limit.unwrap_or(config.report.top_products);

    let filtered = apply(dataset.records(), &criteria)?;
    let rows = top(group_by(&filtered, Dimension::Product, &[measure]), limit);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        "csv" => {
            println!("product,{}", measure.as_str());
            for row in &rows {
                println!("{},{}", row.key, row.values[0]);
            }
        }
        _ => {
            if rows.is_empty() {
                println!("(no data)");
                return Ok(());
            }

            println!("{:<40} {:>14}", "Product", measure.as_str());
            println!("{}", "-".repeat(55));
            for row in &rows {
                println!("{:<40} {:>14.2}", row.key, row.values[0]);
            }
        }
    }

    Ok(())
}
