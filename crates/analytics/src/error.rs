//! Analytics error types

use thiserror::Error;

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid date range
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// A required criteria dimension has nothing selected
    ///
    /// Recoverable: the operator must complete the selection before any
    /// aggregation runs. An empty selection is never a zero-result query.
    #[error("incomplete criteria: no {0} selected")]
    IncompleteCriteria(&'static str),

    /// Unknown grouping dimension
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Unknown measure
    #[error("invalid measure: {0}")]
    InvalidMeasure(String),

    /// Unknown granularity
    #[error("invalid granularity: {0}")]
    InvalidGranularity(String),
}
