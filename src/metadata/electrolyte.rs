use serde::{Deserialize, Serialize};

/// Electrolyte the experiment was run in.
///
/// Attached to results as context only; nothing in the voltammetry pipeline
/// reads these values. The kinetic models validate them on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Electrolyte {
    /// Cation identity (e.g., "Na+")
    pub cation: String,

    /// Anion identity (e.g., "Cl-")
    pub anion: String,

    /// Solvent identity (e.g., "H2O")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solvent: Option<String>,

    /// Bulk pH
    pub ph: f64,

    /// Temperature in kelvin
    pub temperature: f64,
}

impl Electrolyte {
    /// Create an electrolyte from its ions, pH and temperature (K)
    pub fn new(cation: &str, anion: &str, ph: f64, temperature: f64) -> Self {
        Self {
            cation: cation.to_string(),
            anion: anion.to_string(),
            solvent: None,
            ph,
            temperature,
        }
    }

    /// Set the solvent
    pub fn with_solvent(mut self, solvent: &str) -> Self {
        self.solvent = Some(solvent.to_string());
        self
    }
}
