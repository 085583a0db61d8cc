use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::VoltammetryError;

/// Sweep direction a sample belongs to.
///
/// Ordered so that oxidation sorts before reduction within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Redox {
    /// Anodic sweep (potential rising or flat)
    Oxidation,
    /// Cathodic sweep (potential falling)
    Reduction,
}

impl Redox {
    /// Lowercase name used in tables and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oxidation => "oxidation",
            Self::Reduction => "reduction",
        }
    }

    /// The other sweep direction
    pub fn opposite(self) -> Self {
        match self {
            Self::Oxidation => Self::Reduction,
            Self::Reduction => Self::Oxidation,
        }
    }
}

impl fmt::Display for Redox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Redox {
    type Err = VoltammetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oxidation" => Ok(Self::Oxidation),
            "reduction" => Ok(Self::Reduction),
            other => Err(VoltammetryError::InvalidArgument(format!(
                "redox must be \"oxidation\" or \"reduction\", got {other:?}"
            ))),
        }
    }
}

/// Sign of the current a charge integral covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    /// Current > 0
    Positive,
    /// Current < 0
    Negative,
}

impl Valence {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    /// True if a current value belongs to this valence; zero belongs to neither
    pub fn contains(&self, current: f64) -> bool {
        match self {
            Self::Positive => current > 0.0,
            Self::Negative => current < 0.0,
        }
    }
}

impl fmt::Display for Valence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Valence {
    type Err = VoltammetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            other => Err(VoltammetryError::InvalidArgument(format!(
                "valence must be \"positive\" or \"negative\", got {other:?}"
            ))),
        }
    }
}

/// Kind of a maximum-charge section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeKind {
    /// Run of positive current
    Anodic,
    /// Run of negative current
    Cathodic,
}

impl ChargeKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anodic => "anodic",
            Self::Cathodic => "cathodic",
        }
    }
}

impl fmt::Display for ChargeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One wrangled measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Working electrode potential (V)
    pub potential: f64,
    /// Current (A)
    pub current: f64,
    /// Time (s)
    pub time: f64,
    /// Reconstructed cycle, starting at 0 for the leading partial cycle
    pub cycle: u32,
    /// Sweep direction
    pub redox: Redox,
    /// Zero-based row of the raw table this sample came from
    pub source_row: usize,
}
