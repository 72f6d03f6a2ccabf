//! Trend command - sales and profit over time
//!
//! # Usage
//!
//! ```bash
//! vend trend
//! vend trend --granularity daily
//! vend trend --format csv > trend.csv
//! ```

use anyhow::Result;
use clap::Args;
use vend_analytics::{Granularity, apply, resample};
use vend_config::Config;

use crate::cmd::{FilterArgs, build_criteria, load_dataset};

/// Trend command arguments
#[derive(Args, Debug)]
pub struct TrendArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Bucket width (daily, monthly). Defaults to the configured value.
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the trend command
pub fn run(args: TrendArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let criteria = build_criteria(&args.filter, &dataset)?;

    let granularity = Granularity::parse(
        args.granularity
            .as_deref()
            .unwrap_or(&config.report.granularity),
    )?;

    let filtered = apply(dataset.records(), &criteria)?;
    let series = resample(&filtered, granularity);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        "csv" => {
            println!("period,sales,profit");
            for point in &series.points {
                println!("{},{},{}", point.period, point.sales, point.profit);
            }
        }
        _ => {
            if series.is_empty() {
                println!("(no data)");
                return Ok(());
            }

            println!("{:<12} {:>14} {:>14}", "Period", "Sales", "Profit");
            println!("{}", "-".repeat(42));
            for point in &series.points {
                println!(
                    "{:<12} {:>14.2} {:>14.2}",
                    point.period, point.sales, point.profit
                );
            }
            println!("{}", "-".repeat(42));
            println!(
                "Total: {:.2} sales, {:.2} profit across {} {} buckets",
                series.total_sales(),
                series.total_profit(),
                series.len(),
                series.granularity.as_str()
            );
        }
    }

    Ok(())
}
