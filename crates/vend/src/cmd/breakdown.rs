//! Breakdown command - sales per segment and category pair
//!
//! # Usage
//!
//! ```bash
//! vend breakdown
//! vend breakdown --measure profit
//! vend breakdown --format json   # chart-shaped series per segment
//! ```

use anyhow::Result;
use clap::Args;
use serde_json::json;
use vend_analytics::{Dimension, Measure, apply, group_by_pair, partition_series};
use vend_config::Config;

use crate::cmd::{FilterArgs, build_criteria, load_dataset};

/// Breakdown command arguments
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Measure to sum (sales, profit)
    #[arg(short, long, default_value = "sales")]
    pub measure: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the breakdown command
pub fn run(args: BreakdownArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let criteria = build_criteria(&args.filter, &dataset)?;
    let measure = Measure::parse(&args.measure)?;

    let filtered = apply(dataset.records(), &criteria)?;
    let rows = group_by_pair(&filtered, Dimension::Segment, Dimension::Category, measure);

    match args.format.as_str() {
        "json" => {
            // Chart-shaped: one series per segment.
            let payload = json!({
                "rows": rows,
                "series": partition_series(&rows),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "csv" => {
            println!("segment,category,{}", measure.as_str());
            for row in &rows {
                println!("{},{},{}", row.first, row.second, row.value);
            }
        }
        _ => {
            if rows.is_empty() {
                println!("(no data)");
                return Ok(());
            }

            println!(
                "{:<20} {:<20} {:>14}",
                "Segment",
                "Category",
                measure.as_str()
            );
            println!("{}", "-".repeat(56));
            for row in &rows {
                println!("{:<20} {:<20} {:>14.2}", row.first, row.second, row.value);
            }
        }
    }

    Ok(())
}
