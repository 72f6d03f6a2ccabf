//! Time-bucketed trend series
//!
//! Buckets rows into calendar-day or calendar-month periods and sums sales
//! and profit per occupied bucket.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use vend_dataset::OrderRecord;

use crate::error::{AnalyticsError, Result};

/// Bucket width for the trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day
    Daily,
    /// One bucket per calendar month
    #[default]
    Monthly,
}

impl Granularity {
    /// Parse granularity from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(Self::Daily),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            _ => Err(AnalyticsError::InvalidGranularity(s.to_string())),
        }
    }

    /// Granularity name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }

    /// Start of the bucket containing `date`
    ///
    /// Monthly buckets are keyed by the first day of the month.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Monthly => date.with_day(1).unwrap_or(date),
        }
    }
}

/// One occupied bucket of the trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Start of the period
    pub period: NaiveDate,
    /// Sales summed over the period
    pub sales: f64,
    /// Profit summed over the period
    pub profit: f64,
}

/// Chronological trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Bucket width the series was built with
    pub granularity: Granularity,
    /// Occupied buckets, ascending by period
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Check if the series holds no buckets
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of occupied buckets
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Sum of sales across all buckets
    ///
    /// Reconciles with the ungrouped sales total of the same row set.
    pub fn total_sales(&self) -> f64 {
        self.points.iter().map(|p| p.sales).sum()
    }

    /// Sum of profit across all buckets
    pub fn total_profit(&self) -> f64 {
        self.points.iter().map(|p| p.profit).sum()
    }
}

/// Bucket records by order date and sum sales and profit per bucket
///
/// The series is sparse: periods with no contributing records are omitted
/// rather than emitted as zero-valued buckets, so a charted series shows a
/// gap where nothing sold. Buckets come back ascending by period start.
pub fn resample(records: &[OrderRecord], granularity: Granularity) -> TrendSeries {
    let mut buckets: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    for record in records {
        let bucket = buckets
            .entry(granularity.bucket_start(record.order_date))
            .or_insert((0.0, 0.0));
        bucket.0 += record.sales;
        bucket.1 += record.profit;
    }

    TrendSeries {
        granularity,
        points: buckets
            .into_iter()
            .map(|(period, (sales, profit))| TrendPoint {
                period,
                sales,
                profit,
            })
            .collect(),
    }
}
