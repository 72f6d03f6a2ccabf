//! Summary command - KPI snapshot with filtered-vs-overall deltas
//!
//! # Usage
//!
//! ```bash
//! vend summary
//! vend summary --range 2024-01-01,2024-03-31 --segment Consumer --region East
//! vend summary --format json
//! ```

use anyhow::Result;
use clap::Args;
use serde_json::json;
use vend_analytics::{apply, compare, summarize};
use vend_config::Config;

use crate::cmd::{FilterArgs, build_criteria, fmt_days, fmt_days_delta, fmt_money, fmt_pct, load_dataset};

/// Summary command arguments
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the summary command
pub fn run(args: SummaryArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let criteria = build_criteria(&args.filter, &dataset)?;

    let filtered = apply(dataset.records(), &criteria)?;
    let overall = summarize(dataset.records());
    let current = summarize(&filtered);
    let deltas = compare(&overall, &current);

    match args.format.as_str() {
        "json" => {
            let payload = json!({
                "overall": overall,
                "filtered": current,
                "deltas": deltas,
                "row_count": filtered.len(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            println!("{:<20} {:>16} {:>16} {:>14}", "Metric", "Filtered", "Overall", "Delta");
            println!("{}", "-".repeat(68));
            println!(
                "{:<20} {:>16} {:>16} {:>14}",
                "Total Sales",
                fmt_money(current.total_sales),
                fmt_money(overall.total_sales),
                fmt_pct(deltas.sales_pct)
            );
            println!(
                "{:<20} {:>16} {:>16} {:>14}",
                "Total Profit",
                fmt_money(current.total_profit),
                fmt_money(overall.total_profit),
                fmt_pct(deltas.profit_pct)
            );
            println!(
                "{:<20} {:>16} {:>16} {:>14}",
                "Total Orders",
                current.total_orders,
                overall.total_orders,
                fmt_pct(deltas.orders_pct)
            );
            println!(
                "{:<20} {:>16} {:>16} {:>14}",
                "Avg Delivery",
                fmt_days(current.avg_delivery_time),
                fmt_days(overall.avg_delivery_time),
                fmt_days_delta(deltas.delivery_days)
            );
            println!("{}", "-".repeat(68));
            println!("Rows in filtered view: {}", filtered.len());
        }
    }

    Ok(())
}
