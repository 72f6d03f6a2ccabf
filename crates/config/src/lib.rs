//! Vend Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use vend_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[dataset]\npath = \"data/orders.csv\"").unwrap();
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [dataset]
//! path = "data/orders.csv"
//!
//! [feedback]
//! path = "feedback.csv"
//!
//! [report]
//! top_products = 10
//! granularity = "monthly"
//!
//! [log]
//! level = "info"
//! format = "console"
//! ```

mod dataset;
mod error;
mod feedback;
mod logging;
mod report;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, Result};
pub use feedback::FeedbackConfig;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use report::ReportConfig;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset source
    pub dataset: DatasetConfig,

    /// Feedback log
    pub feedback: FeedbackConfig,

    /// Report defaults
    pub report: ReportConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Validate the configuration
    ///
    /// Checks for:
    /// - Non-empty dataset and feedback paths
    /// - A usable leaderboard length
    fn validate(&self) -> Result<()> {
        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value(
                "dataset",
                "path",
                "must not be empty",
            ));
        }
        if self.feedback.path.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value(
                "feedback",
                "path",
                "must not be empty",
            ));
        }
        if self.report.top_products == 0 {
            return Err(ConfigError::invalid_value(
                "report",
                "top_products",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}
