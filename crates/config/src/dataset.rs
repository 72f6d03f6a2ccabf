//! Dataset source configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Dataset source configuration
///
/// # Example
///
/// ```toml
/// [dataset]
/// path = "data/orders.csv"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the delimited sales export
    /// Default: data/orders.csv
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/orders.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = DatasetConfig::default();
        assert_eq!(config.path, PathBuf::from("data/orders.csv"));
    }

    #[test]
    fn test_deserialize_path() {
        let config: DatasetConfig = toml::from_str("path = \"exports/q1.csv\"").unwrap();
        assert_eq!(config.path, PathBuf::from("exports/q1.csv"));
    }
}
