//! Filter criteria and the filtering pass
//!
//! Criteria define which rows feed a recomputation: an inclusive order-date
//! range plus segment and region selections. Both selections must be
//! populated before anything downstream runs.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vend_dataset::OrderRecord;

use crate::error::{AnalyticsError, Result};

/// An inclusive calendar-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the range (inclusive)
    pub start: NaiveDate,
    /// End of the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new date range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AnalyticsError::InvalidRange(
                "end must not precede start".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Parse a range string in the form `YYYY-MM-DD,YYYY-MM-DD`
    pub fn parse(s: &str) -> Result<Self> {
        let Some((start, end)) = s.split_once(',') else {
            return Err(AnalyticsError::InvalidRange(format!(
                "'{}' (use START,END as YYYY-MM-DD,YYYY-MM-DD)",
                s
            )));
        };

        Self::new(parse_date(start.trim())?, parse_date(end.trim())?)
    }

    /// Check whether a date falls inside the range, endpoints included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        AnalyticsError::InvalidRange(format!("invalid date '{}' (use YYYY-MM-DD)", s))
    })
}

/// Row-selection criteria for one recomputation pass
///
/// Rebuilt on every interaction. Segments and regions are exact-match sets;
/// an empty set means the operator has not finished selecting, not "match
/// nothing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Order-date window, inclusive on both ends
    pub range: DateRange,
    /// Selected customer segments
    pub segments: BTreeSet<String>,
    /// Selected regions
    pub regions: BTreeSet<String>,
}

impl Criteria {
    /// Create criteria covering a date range with nothing selected yet
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            segments: BTreeSet::new(),
            regions: BTreeSet::new(),
        }
    }

    /// Add a segment to the selection
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.insert(segment.into());
        self
    }

    /// Add several segments to the selection
    pub fn with_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }

    /// Add a region to the selection
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.regions.insert(region.into());
        self
    }

    /// Add several regions to the selection
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.extend(regions.into_iter().map(Into::into));
        self
    }

    /// Check that both selections are populated
    pub fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(AnalyticsError::IncompleteCriteria("segments"));
        }
        if self.regions.is_empty() {
            return Err(AnalyticsError::IncompleteCriteria("regions"));
        }
        Ok(())
    }

    /// Check whether a record satisfies every predicate
    pub fn matches(&self, record: &OrderRecord) -> bool {
        self.range.contains(record.order_date)
            && self.segments.contains(&record.segment)
            && self.regions.contains(&record.region)
    }
}

/// Apply criteria to a row set
///
/// Pure and order-preserving: the input is never mutated and kept rows stay
/// in input order, so re-applying the same criteria to the output returns an
/// identical set. Fails with `IncompleteCriteria` before touching any row if
/// either selection is empty; a populated selection that matches nothing
/// yields an empty (not erroneous) result.
pub fn apply(records: &[OrderRecord], criteria: &Criteria) -> Result<Vec<OrderRecord>> {
    criteria.validate()?;

    let filtered: Vec<OrderRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    if filtered.is_empty() {
        tracing::warn!(total = records.len(), "filter matched no rows");
    }

    Ok(filtered)
}
