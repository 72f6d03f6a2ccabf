//! Vend Analytics Engine
//!
//! The computation pipeline behind the sales dashboard: filter an in-memory
//! order dataset, compute KPIs with filtered-vs-overall deltas, build grouped
//! summaries for charts, and bucket rows into trend series.
//!
//! # Overview
//!
//! - **Filter**: inclusive date range plus segment/region selections
//! - **KPI**: sums, distinct order count, mean delivery time, deltas
//! - **Group**: single- and two-dimension summaries, top-N
//! - **Resample**: daily or monthly trend buckets
//! - **Report**: one full recomputation pass for a view refresh
//!
//! Every operation is pure and synchronous; a recomputation either completes
//! or the triggering call fails outright. Empty filtered views degrade to
//! empty summaries and NaN-bearing KPI fields, never to errors.
//!
//! # Usage
//!
//! ```ignore
//! use vend_analytics::{Criteria, DateRange, Granularity, Report};
//!
//! let range = DateRange::parse("2024-01-01,2024-12-31")?;
//! let criteria = Criteria::new(range)
//!     .with_segment("Consumer")
//!     .with_region("East");
//!
//! let report = Report::build(dataset.records(), &criteria, Granularity::Monthly, 10)?;
//! ```

pub mod error;
pub mod filter;
pub mod group;
pub mod kpi;
pub mod report;
pub mod resample;

#[cfg(test)]
mod group_test;

// Re-exports for convenience
pub use error::{AnalyticsError, Result};
pub use filter::{Criteria, DateRange, apply};
pub use group::{
    Dimension, GroupRow, Measure, PairRow, SeriesGroup, group_by, group_by_pair, partition_series,
    top,
};
pub use kpi::{KpiDeltas, KpiSnapshot, compare, percent_delta, summarize};
pub use report::{DEFAULT_TOP_PRODUCTS, Report};
pub use resample::{Granularity, TrendPoint, TrendSeries, resample};
