use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::electrolyte::Electrolyte;
use super::MetadataError;

/// Experiment context attached to a voltammogram and to every exported table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentMetadata {
    /// Electrolyte composition and conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electrolyte: Option<Electrolyte>,

    /// Instrument or vendor name (e.g., "BioLogic SP-200")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,

    /// Potential scan rate in mV/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_rate: Option<f64>,
}

impl ExperimentMetadata {
    /// Create an empty metadata container
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an electrolyte
    pub fn with_electrolyte(mut self, electrolyte: Electrolyte) -> Self {
        self.electrolyte = Some(electrolyte);
        self
    }

    /// Set the instrument name
    pub fn with_instrument(mut self, instrument: &str) -> Self {
        self.instrument = Some(instrument.to_string());
        self
    }

    /// Set the scan rate (mV/s)
    pub fn with_scan_rate(mut self, scan_rate: f64) -> Self {
        self.scan_rate = Some(scan_rate);
        self
    }

    /// Electrolyte pH, if an electrolyte is attached
    pub fn ph(&self) -> Option<f64> {
        self.electrolyte.as_ref().map(|e| e.ph)
    }

    /// Electrolyte temperature (K), if an electrolyte is attached
    pub fn temperature(&self) -> Option<f64> {
        self.electrolyte.as_ref().map(|e| e.temperature)
    }

    /// Serialize to JSON for Parquet footer storage
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize from a TOML document such as the `[experiment]` table of
    /// a config file
    pub fn from_toml(text: &str) -> Result<Self, MetadataError> {
        Ok(toml::from_str(text)?)
    }

    /// Convert to a HashMap suitable for Parquet key_value_metadata
    pub fn to_parquet_metadata(&self) -> Result<HashMap<String, String>, MetadataError> {
        use crate::schema::*;

        let mut metadata = HashMap::new();

        metadata.insert(KEY_FORMAT_VERSION.to_string(), FORMAT_VERSION.to_string());

        metadata.insert(
            KEY_PROCESSING_TIMESTAMP.to_string(),
            chrono::Utc::now().to_rfc3339(),
        );

        metadata.insert(
            KEY_SOFTWARE.to_string(),
            format!("echem-analytics v{}", env!("CARGO_PKG_VERSION")),
        );

        metadata.insert(KEY_EXPERIMENT_METADATA.to_string(), self.to_json()?);

        Ok(metadata)
    }

    /// Reconstruct metadata from Parquet key_value_metadata
    pub fn from_parquet_metadata(metadata: &HashMap<String, String>) -> Result<Self, MetadataError> {
        match metadata.get(crate::schema::KEY_EXPERIMENT_METADATA) {
            Some(json) => Self::from_json(json),
            None => Ok(Self::new()),
        }
    }
}
