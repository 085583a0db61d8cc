use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::IngestError;

/// Instrument export format of an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentSource {
    /// BioLogic EC-Lab text export (tab or whitespace separated)
    Biologic,
    /// Pine Research AfterMath CSV export
    Aftermath,
}

impl InstrumentSource {
    /// Lowercase tag used in uploads and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biologic => "biologic",
            Self::Aftermath => "aftermath",
        }
    }
}

impl fmt::Display for InstrumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for InstrumentSource {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "biologic" => Ok(Self::Biologic),
            "aftermath" => Ok(Self::Aftermath),
            other => Err(IngestError::UnknownSource(other.to_string())),
        }
    }
}
