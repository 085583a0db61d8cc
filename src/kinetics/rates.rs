use serde::{Deserialize, Serialize};

use super::{KineticsError, FARADAY, GAS_CONSTANT};

/// Butler-Volmer rate constants for a single electron-transfer step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButlerVolmer {
    /// Standard heterogeneous rate constant k⁰ (cm/s)
    pub standard_rate_constant: f64,
    /// Transfer coefficient β, strictly between 0 and 1
    pub transfer_coefficient: f64,
    /// Formal potential E⁰' (V)
    pub formal_potential: f64,
}

impl ButlerVolmer {
    /// Create a rate law, rejecting a transfer coefficient outside (0, 1)
    pub fn new(
        standard_rate_constant: f64,
        transfer_coefficient: f64,
        formal_potential: f64,
    ) -> Result<Self, KineticsError> {
        if !(transfer_coefficient > 0.0 && transfer_coefficient < 1.0) {
            return Err(KineticsError::InvalidTransferCoefficient(transfer_coefficient));
        }
        if !(standard_rate_constant > 0.0) {
            return Err(KineticsError::NonPositive("standard rate constant"));
        }
        Ok(Self {
            standard_rate_constant,
            transfer_coefficient,
            formal_potential,
        })
    }

    /// Reduction rate constant k_f at `potential` (V) and `temperature` (K)
    pub fn forward_rate(&self, potential: f64, temperature: f64) -> f64 {
        let f = FARADAY / (GAS_CONSTANT * temperature);
        self.standard_rate_constant
            * (-self.transfer_coefficient * f * (potential - self.formal_potential)).exp()
    }

    /// Oxidation rate constant k_b at `potential` (V) and `temperature` (K)
    pub fn backward_rate(&self, potential: f64, temperature: f64) -> f64 {
        let f = FARADAY / (GAS_CONSTANT * temperature);
        self.standard_rate_constant
            * ((1.0 - self.transfer_coefficient) * f * (potential - self.formal_potential)).exp()
    }
}

/// Combine kinetic and mass-transport limited currents:
/// 1/i = 1/i_k + 1/i_L
pub fn koutecky_levich(kinetic: f64, limiting: f64) -> f64 {
    1.0 / (1.0 / kinetic + 1.0 / limiting)
}
