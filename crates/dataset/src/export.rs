//! Filtered-view export
//!
//! Serializes records back to the source's delimited layout: UTF-8, the
//! exact source header row, dates as YYYY-MM-DD. An exported view re-parses
//! through [`Dataset::from_reader`](crate::Dataset::from_reader) to the same
//! logical rows.

use std::io::Write;

use crate::error::Result;
use crate::record::{COLUMNS, DATE_FORMAT, OrderRecord};

/// Write records as delimited text to any writer
pub fn write_csv<W: Write>(records: &[OrderRecord], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(COLUMNS)?;

    for record in records {
        let order_date = record.order_date.format(DATE_FORMAT).to_string();
        let ship_date = record.ship_date.format(DATE_FORMAT).to_string();
        let sales = record.sales.to_string();
        let profit = record.profit.to_string();
        writer.write_record([
            record.order_id.as_str(),
            order_date.as_str(),
            ship_date.as_str(),
            record.segment.as_str(),
            record.region.as_str(),
            record.category.as_str(),
            record.product_name.as_str(),
            sales.as_str(),
            profit.as_str(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Serialize records to an in-memory byte stream
pub fn to_csv_bytes(records: &[OrderRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(buffer)
}
