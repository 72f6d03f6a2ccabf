//! Order record model
//!
//! One row of the sales dataset with both date columns parsed and the
//! delivery time derived at load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Source column names, in source order
///
/// Shared by the loader's header check and the exporter, so an exported view
/// always re-parses.
pub const COLUMNS: [&str; 9] = [
    "Order ID",
    "Order Date",
    "Ship Date",
    "Segment",
    "Region",
    "Category",
    "Product Name",
    "Sales",
    "Profit",
];

/// Date layout used on export (and preferred on load)
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single order from the sales dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier (one order can span multiple product rows)
    pub order_id: String,
    /// Date the order was placed
    pub order_date: NaiveDate,
    /// Date the order shipped
    pub ship_date: NaiveDate,
    /// Customer segment (open set, e.g. "Consumer")
    pub segment: String,
    /// Sales region (open set, e.g. "East")
    pub region: String,
    /// Product category
    pub category: String,
    /// Product name
    pub product_name: String,
    /// Sale amount, non-negative
    pub sales: f64,
    /// Profit amount; losses are negative
    pub profit: f64,
    /// Days between order and ship date
    ///
    /// Negative when the recorded ship date precedes the order date; the
    /// dataset contains such rows and they are valid numeric input.
    pub delivery_time: i64,
}

impl OrderRecord {
    /// Build a record from parsed fields, deriving the delivery time
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_id: impl Into<String>,
        order_date: NaiveDate,
        ship_date: NaiveDate,
        segment: impl Into<String>,
        region: impl Into<String>,
        category: impl Into<String>,
        product_name: impl Into<String>,
        sales: f64,
        profit: f64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            order_date,
            ship_date,
            segment: segment.into(),
            region: region.into(),
            category: category.into(),
            product_name: product_name.into(),
            sales,
            profit,
            delivery_time: (ship_date - order_date).num_days(),
        }
    }
}
