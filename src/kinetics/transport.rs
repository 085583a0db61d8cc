use serde::{Deserialize, Serialize};

use super::KineticsError;

/// Mass-transport properties of dissolved oxygen in the electrolyte
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportProperties {
    /// Bulk O2 concentration (mol/L)
    pub oxygen_concentration: f64,
    /// O2 diffusion coefficient (cm²/s)
    pub oxygen_diffusivity: f64,
    /// Kinematic viscosity of the electrolyte (cm²/s)
    pub kinematic_viscosity: f64,
}

impl Default for TransportProperties {
    /// Air-saturated water at room temperature
    fn default() -> Self {
        Self {
            oxygen_concentration: 0.00025,
            oxygen_diffusivity: 1.9e-5,
            kinematic_viscosity: 0.01,
        }
    }
}

impl TransportProperties {
    pub(crate) fn validate(&self) -> Result<(), KineticsError> {
        if !(self.oxygen_diffusivity > 0.0) {
            return Err(KineticsError::NonPositive("oxygen diffusivity"));
        }
        if !(self.kinematic_viscosity > 0.0) {
            return Err(KineticsError::NonPositive("kinematic viscosity"));
        }
        if !(self.oxygen_concentration > 0.0) {
            return Err(KineticsError::NonPositive("oxygen concentration"));
        }
        Ok(())
    }
}
