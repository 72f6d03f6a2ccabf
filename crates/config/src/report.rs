//! Report defaults configuration

use serde::Deserialize;

/// Report defaults
///
/// # Example
///
/// ```toml
/// [report]
/// top_products = 10
/// granularity = "monthly"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Length of the product profit leaderboard
    /// Default: 10
    pub top_products: usize,

    /// Default trend bucket width (daily, monthly)
    /// Default: monthly
    pub granularity: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_products: 10,
            granularity: "monthly".to_string(),
        }
    }
}
