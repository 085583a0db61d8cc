//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation:
//!
//! ```toml
//! # echem.toml
//! [wrangle]
//! keep_first_cycle = false
//! skip_window = 5
//!
//! [export]
//! compression_level = 9
//! row_group_size = 100000
//!
//! [experiment]
//! instrument = "BioLogic SP-200"
//! scan_rate = 50.0
//!
//! [experiment.electrolyte]
//! cation = "Na+"
//! anion = "Cl-"
//! ph = 7.0
//! temperature = 298.15
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use echem_analytics::metadata::ExperimentMetadata;
use echem_analytics::voltammetry::WrangleConfig;

/// Root configuration structure for echem.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Wrangling options.
    #[serde(default)]
    pub wrangle: WrangleConfig,

    /// Parquet export settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Experiment context attached to results.
    #[serde(default)]
    pub experiment: ExperimentMetadata,
}

/// Configuration for the export command.
#[derive(Debug, Default, Deserialize)]
pub struct ExportConfig {
    /// ZSTD compression level (1-22).
    pub compression_level: Option<i32>,

    /// Maximum rows per Parquet row group.
    pub row_group_size: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [wrangle]
            keep_first_cycle = true

            [export]
            compression_level = 15
            row_group_size = 200000

            [experiment]
            scan_rate = 50.0

            [experiment.electrolyte]
            cation = "Na+"
            anion = "Cl-"
            ph = 7.0
            temperature = 298.15
        "#;

        let config = Config::from_str(toml).unwrap();
        assert!(config.wrangle.keep_first_cycle);
        assert_eq!(config.wrangle.skip_window, 5);
        assert_eq!(config.export.compression_level, Some(15));
        assert_eq!(config.export.row_group_size, Some(200_000));
        assert_eq!(config.experiment.scan_rate, Some(50.0));
        assert_eq!(config.experiment.ph(), Some(7.0));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert!(!config.wrangle.keep_first_cycle);
        assert_eq!(config.wrangle.skip_window, 5);
        assert!(config.export.compression_level.is_none());
        assert!(config.experiment.electrolyte.is_none());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[wrangle]\nskip_window = \"many\"").is_err());
    }
}
