//! CLI subcommands
//!
//! Each subcommand owns an `Args` struct and a `run()`. Shared helpers here
//! cover dataset loading, the filter flags every analytics subcommand takes,
//! and KPI formatting.

pub mod breakdown;
pub mod export;
pub mod feedback;
pub mod groups;
pub mod report;
pub mod summary;
pub mod top;
pub mod trend;

use anyhow::{Context, Result};
use clap::Args;
use vend_analytics::{Criteria, DateRange};
use vend_config::Config;
use vend_dataset::Dataset;

/// Filter flags shared by the analytics subcommands
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Order-date range as START,END (YYYY-MM-DD,YYYY-MM-DD).
    /// Defaults to the dataset's full span.
    #[arg(short, long)]
    pub range: Option<String>,

    /// Segment to include (repeatable). Defaults to every segment present.
    #[arg(short, long = "segment")]
    pub segments: Vec<String>,

    /// Region to include (repeatable). Defaults to every region present.
    #[arg(short = 'R', long = "region")]
    pub regions: Vec<String>,
}

/// Load the dataset named by the configuration
pub fn load_dataset(config: &Config) -> Result<Dataset> {
    Dataset::from_path(&config.dataset.path).with_context(|| {
        format!(
            "failed to load dataset from '{}'",
            config.dataset.path.display()
        )
    })
}

/// Build criteria from filter flags
///
/// Flags left out default to the dataset's full breadth: the whole date span
/// and every segment/region value present. That is the CLI's "select all";
/// an incomplete selection is only reachable through the library API.
pub fn build_criteria(args: &FilterArgs, dataset: &Dataset) -> Result<Criteria> {
    let range = match &args.range {
        Some(s) => DateRange::parse(s)?,
        None => {
            let (start, end) = dataset
                .date_span()
                .context("dataset has no rows; pass --range explicitly")?;
            DateRange::new(start, end)?
        }
    };

    let criteria = Criteria::new(range);
    let criteria = if args.segments.is_empty() {
        criteria.with_segments(dataset.segments())
    } else {
        criteria.with_segments(args.segments.iter().cloned())
    };
    let criteria = if args.regions.is_empty() {
        criteria.with_regions(dataset.regions())
    } else {
        criteria.with_regions(args.regions.iter().cloned())
    };

    Ok(criteria)
}

/// Format a currency amount
pub fn fmt_money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a percentage delta; the undefined (NaN) case renders as "n/a"
pub fn fmt_pct(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:+.2}%", value)
    }
}

/// Format a days figure; the no-data (NaN) case renders as "n/a"
pub fn fmt_days(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2} days", value)
    }
}

/// Format a day-difference figure; the no-data (NaN) case renders as "n/a"
pub fn fmt_days_delta(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:+.2} days", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(-70.0), "-70.00%");
        assert_eq!(fmt_pct(12.345), "+12.35%");
        assert_eq!(fmt_pct(f64::NAN), "n/a");
    }

    #[test]
    fn test_fmt_days() {
        assert_eq!(fmt_days(3.5), "3.50 days");
        assert_eq!(fmt_days(f64::NAN), "n/a");
        assert_eq!(fmt_days_delta(-0.4), "-0.40 days");
    }

    #[test]
    fn test_build_criteria_defaults_to_full_breadth() {
        let data = "\
Order ID,Order Date,Ship Date,Segment,Region,Category,Product Name,Sales,Profit
CA-1,2024-01-05,2024-01-09,Consumer,East,Furniture,Desk,100,20
CA-2,2024-03-10,2024-03-12,Corporate,West,Technology,Mouse,200,30
";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        let args = FilterArgs {
            range: None,
            segments: Vec::new(),
            regions: Vec::new(),
        };

        let criteria = build_criteria(&args, &dataset).unwrap();
        assert_eq!(criteria.segments.len(), 2);
        assert_eq!(criteria.regions.len(), 2);
        assert!(criteria.validate().is_ok());

        // Full span covers every row.
        let filtered = vend_analytics::apply(dataset.records(), &criteria).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_build_criteria_explicit_flags() {
        let data = "\
Order ID,Order Date,Ship Date,Segment,Region,Category,Product Name,Sales,Profit
CA-1,2024-01-05,2024-01-09,Consumer,East,Furniture,Desk,100,20
";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        let args = FilterArgs {
            range: Some("2024-01-01,2024-06-30".to_string()),
            segments: vec!["Consumer".to_string()],
            regions: vec!["East".to_string()],
        };

        let criteria = build_criteria(&args, &dataset).unwrap();
        assert_eq!(criteria.segments.len(), 1);
        assert!(criteria.segments.contains("Consumer"));
    }

    #[test]
    fn test_build_criteria_empty_dataset_needs_range() {
        let data =
            "Order ID,Order Date,Ship Date,Segment,Region,Category,Product Name,Sales,Profit\n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        let args = FilterArgs {
            range: None,
            segments: Vec::new(),
            regions: Vec::new(),
        };

        assert!(build_criteria(&args, &dataset).is_err());
    }
}
