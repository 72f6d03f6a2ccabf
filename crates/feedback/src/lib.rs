//! Vend feedback log
//!
//! Append-only storage for operator comments: one `timestamp,comment` row per
//! entry in a two-column delimited text file. The file gets its header on
//! first write and is only ever appended to afterwards.
//!
//! Comment text is neutralized before it hits disk so one entry is always
//! one row: literal commas become semicolons and line breaks become spaces.
//! Beyond rejecting blank-after-trim comments, content is not validated.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

/// Header written when the log file is first created
const HEADER: &str = "Timestamp,Feedback";

/// Timestamp layout for entries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result type for feedback operations
pub type Result<T> = std::result::Result<T, FeedbackError>;

/// Errors from the feedback log
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Log file could not be read or written
    #[error("failed to access feedback log '{path}': {source}")]
    Io {
        /// Path to the log file
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Comment was empty after trimming
    ///
    /// Recoverable: prompt the operator for actual content.
    #[error("feedback comment is empty")]
    EmptyComment,
}

/// One stored feedback entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    /// When the comment was recorded (UTC, `YYYY-MM-DD HH:MM:SS`)
    pub timestamp: String,
    /// The neutralized comment text
    pub comment: String,
}

/// Append-only feedback log backed by a delimited text file
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    /// Create a handle for a log file path
    ///
    /// The file itself is created lazily on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a comment, stamping it with the current UTC time
    ///
    /// Rejects comments that are blank after trimming. Returns the entry as
    /// written, with delimiters already neutralized.
    pub fn append(&self, comment: &str) -> Result<FeedbackEntry> {
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        self.append_at(comment, &timestamp)
    }

    /// Append a comment with an explicit timestamp
    pub fn append_at(&self, comment: &str, timestamp: &str) -> Result<FeedbackEntry> {
        let trimmed = comment.trim();
        if trimmed.is_empty() {
            return Err(FeedbackError::EmptyComment);
        }

        let neutralized = neutralize(trimmed);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        // A fresh (or truncated) file needs the header before any entry.
        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);
        if needs_header {
            writeln!(file, "{}", HEADER).map_err(|e| self.io_error(e))?;
        }

        writeln!(file, "{},{}", timestamp, neutralized).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "feedback entry recorded");

        Ok(FeedbackEntry {
            timestamp: timestamp.to_string(),
            comment: neutralized,
        })
    }

    /// Read every stored entry, oldest first
    ///
    /// A log that does not exist yet reads as empty.
    pub fn entries(&self) -> Result<Vec<FeedbackEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let entries = contents
            .lines()
            .skip(1) // header
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                // Comment text never carries a literal comma, so the first
                // comma always separates the columns.
                let (timestamp, comment) = line.split_once(',').unwrap_or((line, ""));
                FeedbackEntry {
                    timestamp: timestamp.to_string(),
                    comment: comment.to_string(),
                }
            })
            .collect();

        Ok(entries)
    }

    fn io_error(&self, source: std::io::Error) -> FeedbackError {
        FeedbackError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

/// Replace characters that would break the two-column row layout
///
/// Commas become semicolons (the column delimiter must stay unambiguous on
/// read-back) and line breaks become spaces (one entry, one row).
fn neutralize(comment: &str) -> String {
    comment
        .replace(',', ";")
        .replace(['\r', '\n'], " ")
}
