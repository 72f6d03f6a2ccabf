//! Feedback log configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Feedback log configuration
///
/// # Example
///
/// ```toml
/// [feedback]
/// path = "feedback.csv"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Path to the append-only feedback file
    /// Default: feedback.csv
    pub path: PathBuf,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("feedback.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = FeedbackConfig::default();
        assert_eq!(config.path, PathBuf::from("feedback.csv"));
    }
}
