//! Grouped summaries for chart consumption
//!
//! Groups rows by one or two dimensions, sums the requested measures, and
//! returns rows sorted descending by the primary measure.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vend_dataset::OrderRecord;

use crate::error::{AnalyticsError, Result};

/// Grouping dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Customer segment
    Segment,
    /// Sales region
    Region,
    /// Product category
    Category,
    /// Product name
    Product,
}

impl Dimension {
    /// Parse a dimension from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "segment" => Ok(Self::Segment),
            "region" => Ok(Self::Region),
            "category" => Ok(Self::Category),
            "product" | "product_name" => Ok(Self::Product),
            _ => Err(AnalyticsError::InvalidDimension(s.to_string())),
        }
    }

    /// Dimension name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Region => "region",
            Self::Category => "category",
            Self::Product => "product",
        }
    }

    /// The record field this dimension groups on
    pub fn key<'a>(&self, record: &'a OrderRecord) -> &'a str {
        match self {
            Self::Segment => &record.segment,
            Self::Region => &record.region,
            Self::Category => &record.category,
            Self::Product => &record.product_name,
        }
    }
}

/// Summed metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Sale amounts
    Sales,
    /// Profit amounts
    Profit,
}

impl Measure {
    /// Parse a measure from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(Self::Sales),
            "profit" => Ok(Self::Profit),
            _ => Err(AnalyticsError::InvalidMeasure(s.to_string())),
        }
    }

    /// Measure name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Profit => "profit",
        }
    }

    /// The record field this measure sums
    pub fn value(&self, record: &OrderRecord) -> f64 {
        match self {
            Self::Sales => record.sales,
            Self::Profit => record.profit,
        }
    }
}

/// One row of a grouped summary: a key plus one sum per requested measure
///
/// `values` aligns index-for-index with the measures passed to [`group_by`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    /// The dimension value (e.g. "East", "Furniture")
    pub key: String,
    /// Summed measures, in request order
    pub values: Vec<f64>,
}

/// Group records by a dimension and sum the requested measures
///
/// Keys compare exactly (case-sensitive). Rows come back sorted descending
/// by the first requested measure; ties keep the order keys first appeared
/// in the input, which the stable sort preserves. With no measures requested
/// the keys come back in first-appearance order, unsorted.
pub fn group_by(records: &[OrderRecord], dimension: Dimension, measures: &[Measure]) -> Vec<GroupRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<GroupRow> = Vec::new();

    for record in records {
        let key = dimension.key(record);
        let i = match index.get(key) {
            Some(&i) => i,
            None => {
                rows.push(GroupRow {
                    key: key.to_string(),
                    values: vec![0.0; measures.len()],
                });
                index.insert(key.to_string(), rows.len() - 1);
                rows.len() - 1
            }
        };
        for (slot, measure) in rows[i].values.iter_mut().zip(measures) {
            *slot += measure.value(record);
        }
    }

    if !measures.is_empty() {
        rows.sort_by(|a, b| {
            b.values[0]
                .partial_cmp(&a.values[0])
                .unwrap_or(Ordering::Equal)
        });
    }

    rows
}

/// First `n` rows of a sorted summary
///
/// Returns the whole summary when fewer than `n` groups exist.
pub fn top(mut rows: Vec<GroupRow>, n: usize) -> Vec<GroupRow> {
    rows.truncate(n);
    rows
}

/// One row of a two-dimension summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRow {
    /// First dimension value (the chart series)
    pub first: String,
    /// Second dimension value (the chart axis)
    pub second: String,
    /// Summed measure for the pair
    pub value: f64,
}

/// Group records by two dimensions and sum one measure per pair
///
/// Same ordering contract as [`group_by`]: descending by value, ties in
/// first-appearance order.
pub fn group_by_pair(
    records: &[OrderRecord],
    first: Dimension,
    second: Dimension,
    measure: Measure,
) -> Vec<PairRow> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut rows: Vec<PairRow> = Vec::new();

    for record in records {
        let key = (
            first.key(record).to_string(),
            second.key(record).to_string(),
        );
        let i = match index.get(&key) {
            Some(&i) => i,
            None => {
                rows.push(PairRow {
                    first: key.0.clone(),
                    second: key.1.clone(),
                    value: 0.0,
                });
                index.insert(key, rows.len() - 1);
                rows.len() - 1
            }
        };
        rows[i].value += measure.value(record);
    }

    rows.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    rows
}

/// A chart series: one first-dimension value with its per-pair sums
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    /// The first-dimension value the series belongs to
    pub label: String,
    /// `(second dimension value, sum)` points, in input order
    pub points: Vec<(String, f64)>,
}

/// Partition two-dimension rows into one series per first-dimension value
///
/// Series and points keep the order of `rows`, so a value-sorted input
/// yields value-sorted series.
pub fn partition_series(rows: &[PairRow]) -> Vec<SeriesGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut series: Vec<SeriesGroup> = Vec::new();

    for row in rows {
        let i = match index.get(row.first.as_str()) {
            Some(&i) => i,
            None => {
                series.push(SeriesGroup {
                    label: row.first.clone(),
                    points: Vec::new(),
                });
                index.insert(row.first.clone(), series.len() - 1);
                series.len() - 1
            }
        };
        series[i].points.push((row.second.clone(), row.value));
    }

    series
}
