//! Dataset loading
//!
//! Reads the delimited sales export once, validates the header row, parses
//! the two date columns, and derives the delivery time for every record.
//! Loading is all-or-nothing: any unreadable cell fails the whole load.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{DatasetError, Result};
use crate::record::{COLUMNS, DATE_FORMAT, OrderRecord};

/// Date layout used by retail source exports
const SOURCE_DATE_FORMAT: &str = "%m/%d/%Y";

/// A row as it appears in the source file, before date parsing
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Order ID")]
    order_id: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Ship Date")]
    ship_date: String,
    #[serde(rename = "Segment")]
    segment: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Profit")]
    profit: f64,
}

/// The loaded sales dataset
///
/// Owns every order record for the lifetime of the process. Construct it once
/// at startup and pass it by reference to the analytics layer; the underlying
/// source is never re-read. Records are immutable after load, so the handle
/// can be shared read-only.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    /// Load the dataset from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let dataset = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), rows = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Load the dataset from any reader of delimited UTF-8 data
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn { column });
            }
        }

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<RawRow>().enumerate() {
            let row = row?;
            // Header occupies line 1
            let line = i + 2;
            let order_date = parse_date(&row.order_date, "Order Date", line)?;
            let ship_date = parse_date(&row.ship_date, "Ship Date", line)?;
            records.push(OrderRecord::new(
                row.order_id,
                order_date,
                ship_date,
                row.segment,
                row.region,
                row.category,
                row.product_name,
                row.sales,
                row.profit,
            ));
        }

        Ok(Self { records })
    }

    /// Borrow the loaded records
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest order date, or None for an empty dataset
    ///
    /// The interactive layer uses this as the default filter range.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.order_date;
        let span = self.records.iter().fold((first, first), |(min, max), r| {
            (min.min(r.order_date), max.max(r.order_date))
        });
        Some(span)
    }

    /// Distinct segment values, sorted
    pub fn segments(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.segment.clone()).collect()
    }

    /// Distinct region values, sorted
    pub fn regions(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.region.clone()).collect()
    }
}

fn parse_date(value: &str, column: &'static str, row: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, SOURCE_DATE_FORMAT))
        .map_err(|_| DatasetError::InvalidDate {
            row,
            column,
            value: value.to_string(),
        })
}
