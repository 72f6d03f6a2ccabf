//! Dataset error types

use std::io;
use thiserror::Error;

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors raised while loading or exporting the sales dataset
///
/// All loader errors are fatal: a dataset either loads completely or not at
/// all, so downstream computation never sees a partial row set.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Source file could not be read
    #[error("failed to read dataset '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Malformed delimited data
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("dataset is missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column
        column: &'static str,
    },

    /// A date cell could not be parsed
    #[error("row {row}: invalid {column} '{value}' (expected YYYY-MM-DD or MM/DD/YYYY)")]
    InvalidDate {
        /// 1-based row number including the header
        row: usize,
        /// Column the cell belongs to
        column: &'static str,
        /// The unparseable cell contents
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_error() {
        let err = DatasetError::MissingColumn { column: "Ship Date" };
        assert!(err.to_string().contains("Ship Date"));
        assert!(err.to_string().contains("missing required column"));
    }

    #[test]
    fn test_invalid_date_error() {
        let err = DatasetError::InvalidDate {
            row: 7,
            column: "Order Date",
            value: "not-a-date".to_string(),
        };
        assert!(err.to_string().contains("row 7"));
        assert!(err.to_string().contains("Order Date"));
        assert!(err.to_string().contains("not-a-date"));
    }
}
