//! Groups command - single-dimension summary
//!
//! # Usage
//!
//! ```bash
//! vend groups --by region
//! vend groups --by segment --measure sales --measure profit
//! vend groups --by category --format json
//! ```

use anyhow::Result;
use clap::Args;
use vend_analytics::{Dimension, Measure, apply, group_by};
use vend_config::Config;

use crate::cmd::{FilterArgs, build_criteria, load_dataset};

/// Groups command arguments
#[derive(Args, Debug)]
pub struct GroupsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Dimension to group by (segment, region, category, product)
    #[arg(short, long)]
    pub by: String,

    /// Measure to sum (repeatable; first one drives the sort order)
    #[arg(short, long = "measure", default_values_t = vec!["sales".to_string()])]
    pub measures: Vec<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the groups command
pub fn run(args: GroupsArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let criteria = build_criteria(&args.filter, &dataset)?;

    let dimension = Dimension::parse(&args.by)?;
    let measures = args
        .measures
        .iter()
        .map(|m| Measure::parse(m))
        .collect::<vend_analytics::Result<Vec<_>>>()?;

    let filtered = apply(dataset.records(), &criteria)?;
    let rows = group_by(&filtered, dimension, &measures);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        "csv" => {
            let header: Vec<&str> = measures.iter().map(|m| m.as_str()).collect();
            println!("{},{}", dimension.as_str(), header.join(","));
            for row in &rows {
                let values: Vec<String> = row.values.iter().map(|v| v.to_string()).collect();
                println!("{},{}", row.key, values.join(","));
            }
        }
        _ => {
            if rows.is_empty() {
                println!("(no data)");
                return Ok(());
            }

            print!("{:<30}", dimension.as_str());
            for measure in &measures {
                print!(" {:>14}", measure.as_str());
            }
            println!();
            println!("{}", "-".repeat(30 + 15 * measures.len()));
            for row in &rows {
                print!("{:<30}", row.key);
                for value in &row.values {
                    print!(" {:>14.2}", value);
                }
                println!();
            }
        }
    }

    Ok(())
}
