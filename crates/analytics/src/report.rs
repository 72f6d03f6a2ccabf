//! One full recomputation pass
//!
//! Everything a rendering collaborator needs for a view refresh, produced in
//! a single synchronous pass: baseline and filtered KPIs with deltas, the
//! standard grouped summaries, and the trend series. The report is plain
//! serializable data; how it is drawn is not this crate's concern.

use serde::{Deserialize, Serialize};
use vend_dataset::OrderRecord;

use crate::error::Result;
use crate::filter::{self, Criteria};
use crate::group::{self, Dimension, GroupRow, Measure, PairRow};
use crate::kpi::{self, KpiDeltas, KpiSnapshot};
use crate::resample::{self, Granularity, TrendSeries};

/// Default length of the product profit leaderboard
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// The render model for one view refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// KPIs over the whole dataset
    pub overall: KpiSnapshot,
    /// KPIs over the filtered view
    pub filtered: KpiSnapshot,
    /// Filtered-vs-overall movement
    pub deltas: KpiDeltas,
    /// Sales summed per region, descending
    pub sales_by_region: Vec<GroupRow>,
    /// Sales summed per category, descending
    pub sales_by_category: Vec<GroupRow>,
    /// Most profitable products, descending by profit
    pub top_products: Vec<GroupRow>,
    /// Sales and profit per customer segment, descending by sales
    pub segment_summary: Vec<GroupRow>,
    /// Sales per segment and category pair
    pub segment_categories: Vec<PairRow>,
    /// Sales and profit trend over the filtered view
    pub trend: TrendSeries,
    /// Number of rows in the filtered view
    pub row_count: usize,
}

impl Report {
    /// Run one full recomputation pass
    ///
    /// Validates the criteria, filters, and computes every summary. The only
    /// error is `IncompleteCriteria`; a filter that matches nothing yields
    /// empty summaries and NaN-bearing KPI fields rather than an error.
    pub fn build(
        records: &[OrderRecord],
        criteria: &Criteria,
        granularity: Granularity,
        top_products: usize,
    ) -> Result<Self> {
        let filtered = filter::apply(records, criteria)?;
        tracing::debug!(
            total = records.len(),
            matched = filtered.len(),
            granularity = granularity.as_str(),
            "recomputing report"
        );

        let overall = kpi::summarize(records);
        let current = kpi::summarize(&filtered);
        let deltas = kpi::compare(&overall, &current);

        Ok(Self {
            overall,
            filtered: current,
            deltas,
            sales_by_region: group::group_by(&filtered, Dimension::Region, &[Measure::Sales]),
            sales_by_category: group::group_by(&filtered, Dimension::Category, &[Measure::Sales]),
            top_products: group::top(
                group::group_by(&filtered, Dimension::Product, &[Measure::Profit]),
                top_products,
            ),
            segment_summary: group::group_by(
                &filtered,
                Dimension::Segment,
                &[Measure::Sales, Measure::Profit],
            ),
            segment_categories: group::group_by_pair(
                &filtered,
                Dimension::Segment,
                Dimension::Category,
                Measure::Sales,
            ),
            trend: resample::resample(&filtered, granularity),
            row_count: filtered.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vend_dataset::OrderRecord;

    use crate::filter::DateRange;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<OrderRecord> {
        vec![
            OrderRecord::new(
                "A-1",
                date(2024, 1, 5),
                date(2024, 1, 8),
                "Consumer",
                "East",
                "Furniture",
                "Oak Desk",
                100.0,
                20.0,
            ),
            OrderRecord::new(
                "A-2",
                date(2024, 2, 10),
                date(2024, 2, 12),
                "Consumer",
                "East",
                "Technology",
                "Wireless Mouse",
                200.0,
                -10.0,
            ),
            OrderRecord::new(
                "A-3",
                date(2024, 2, 11),
                date(2024, 2, 15),
                "Corporate",
                "West",
                "Furniture",
                "Bookcase",
                400.0,
                60.0,
            ),
        ]
    }

    fn criteria() -> Criteria {
        Criteria::new(DateRange::new(date(2024, 1, 1), date(2024, 2, 28)).unwrap())
            .with_segment("Consumer")
            .with_region("East")
    }

    #[test]
    fn test_report_full_pass() {
        let records = records();
        let report =
            Report::build(&records, &criteria(), Granularity::Monthly, DEFAULT_TOP_PRODUCTS)
                .unwrap();

        assert_eq!(report.row_count, 2);
        assert_eq!(report.filtered.total_sales, 300.0);
        assert_eq!(report.overall.total_sales, 700.0);
        assert_eq!(report.trend.len(), 2);
        assert_eq!(report.sales_by_region.len(), 1);
        assert_eq!(report.sales_by_region[0].key, "East");
        assert_eq!(report.top_products[0].key, "Oak Desk");
        assert_eq!(report.segment_summary[0].values, vec![300.0, 10.0]);
    }

    #[test]
    fn test_report_requires_complete_criteria() {
        let records = records();
        let incomplete = Criteria::new(DateRange::new(date(2024, 1, 1), date(2024, 2, 28)).unwrap())
            .with_segment("Consumer");

        let err = Report::build(&records, &incomplete, Granularity::Monthly, 10).unwrap_err();
        assert!(err.to_string().contains("regions"));
    }

    #[test]
    fn test_report_empty_match_degrades() {
        let records = records();
        let unmatched = Criteria::new(DateRange::new(date(2030, 1, 1), date(2030, 12, 31)).unwrap())
            .with_segment("Consumer")
            .with_region("East");

        let report = Report::build(&records, &unmatched, Granularity::Daily, 10).unwrap();
        assert_eq!(report.row_count, 0);
        assert_eq!(report.filtered.total_sales, 0.0);
        assert!(report.filtered.avg_delivery_time.is_nan());
        assert!(report.trend.is_empty());
        assert!(report.sales_by_region.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let records = records();
        let report = Report::build(&records, &criteria(), Granularity::Monthly, 10).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("sales_by_region"));
        assert!(json.contains("East"));
    }
}
