//! Scalar KPI aggregation
//!
//! Sums, distinct order counts, and mean delivery time over a row set, plus
//! filtered-vs-baseline deltas for the KPI cards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use vend_dataset::OrderRecord;

/// Scalar summary of a row set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Sum of sales
    pub total_sales: f64,
    /// Sum of profit
    pub total_profit: f64,
    /// Count of distinct order ids
    pub total_orders: u64,
    /// Mean delivery time in days; NaN for an empty row set
    pub avg_delivery_time: f64,
}

/// Compute the KPI snapshot for a row set
///
/// An empty row set produces zero sums, a zero order count, and a NaN mean
/// delivery time. Callers render the NaN as "no data", never as 0 days.
pub fn summarize(records: &[OrderRecord]) -> KpiSnapshot {
    let mut total_sales = 0.0;
    let mut total_profit = 0.0;
    let mut delivery_days = 0i64;
    let mut order_ids = HashSet::new();

    for record in records {
        total_sales += record.sales;
        total_profit += record.profit;
        delivery_days += record.delivery_time;
        order_ids.insert(record.order_id.as_str());
    }

    let avg_delivery_time = if records.is_empty() {
        f64::NAN
    } else {
        delivery_days as f64 / records.len() as f64
    };

    KpiSnapshot {
        total_sales,
        total_profit,
        total_orders: order_ids.len() as u64,
        avg_delivery_time,
    }
}

/// Movement of each KPI between a baseline and a current snapshot
///
/// Sales, profit, and order deltas are percentages of the baseline. The
/// delivery delta is an absolute difference in days, never a percentage.
/// A zero baseline metric makes the corresponding percentage NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KpiDeltas {
    /// Sales movement as a percentage of baseline sales
    pub sales_pct: f64,
    /// Profit movement as a percentage of baseline profit
    pub profit_pct: f64,
    /// Order-count movement as a percentage of the baseline count
    pub orders_pct: f64,
    /// Current minus baseline mean delivery time, in days
    pub delivery_days: f64,
}

/// Compare a current snapshot against a baseline
pub fn compare(baseline: &KpiSnapshot, current: &KpiSnapshot) -> KpiDeltas {
    KpiDeltas {
        sales_pct: percent_delta(current.total_sales, baseline.total_sales),
        profit_pct: percent_delta(current.total_profit, baseline.total_profit),
        orders_pct: percent_delta(current.total_orders as f64, baseline.total_orders as f64),
        delivery_days: current.avg_delivery_time - baseline.avg_delivery_time,
    }
}

/// Percentage movement of `current` relative to `baseline`
///
/// `(current − baseline) / baseline × 100`. Returns NaN when the baseline is
/// zero (the zero/zero case included): there is no meaningful percentage of
/// nothing, and a fabricated figure would read as real movement on a KPI
/// card.
pub fn percent_delta(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        f64::NAN
    } else {
        (current - baseline) / baseline * 100.0
    }
}
