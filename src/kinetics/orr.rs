use std::f64::consts::PI;

use log::debug;

use crate::metadata::Electrolyte;

use super::transport::TransportProperties;
use super::{KineticsError, FARADAY};

/// Below this pH protons are the proton donor and no water is consumed
const ACIDIC_PH_LIMIT: f64 = 4.88;
/// Above this pH the peroxide product is deprotonated (HO2-)
const ALKALINE_PH_LIMIT: f64 = 11.62;

/// Oxygen reduction at a rotating disk electrode.
///
/// Combines Levich mass transport with the pH-dependent stoichiometry of
/// the two-electron pathway.
#[derive(Debug, Clone, PartialEq)]
pub struct OxygenReductionModel {
    ph: f64,
    temperature: f64,
    transport: TransportProperties,
    rotation_rate: f64,
}

impl OxygenReductionModel {
    /// Build the model for an electrolyte spun at `rotation_rate` rpm
    pub fn new(
        electrolyte: &Electrolyte,
        transport: TransportProperties,
        rotation_rate: f64,
    ) -> Result<Self, KineticsError> {
        if !(0.0..=14.0).contains(&electrolyte.ph) {
            return Err(KineticsError::PhOutOfRange(electrolyte.ph));
        }
        if !(electrolyte.temperature > 0.0) {
            return Err(KineticsError::NonPositive("temperature"));
        }
        if !(rotation_rate > 0.0) {
            return Err(KineticsError::NonPositive("rotation rate"));
        }
        transport.validate()?;

        let model = Self {
            ph: electrolyte.ph,
            temperature: electrolyte.temperature,
            transport,
            rotation_rate,
        };
        debug!(
            "ORR model at pH {} and {} rpm: delta = {:.3e} cm",
            model.ph,
            rotation_rate,
            model.diffusion_layer_thickness()
        );
        Ok(model)
    }

    /// Electrolyte pH
    pub fn ph(&self) -> f64 {
        self.ph
    }

    /// Temperature (K)
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Rotation rate (rpm)
    pub fn rotation_rate(&self) -> f64 {
        self.rotation_rate
    }

    /// Transport properties
    pub fn transport(&self) -> &TransportProperties {
        &self.transport
    }

    /// Angular velocity ω (rad/s)
    pub fn angular_velocity(&self) -> f64 {
        2.0 * PI * self.rotation_rate / 60.0
    }

    /// Water molecules consumed per O2 reduced to peroxide
    pub fn water_stoichiometry(&self) -> u32 {
        if self.ph < ACIDIC_PH_LIMIT {
            0
        } else if self.ph > ALKALINE_PH_LIMIT {
            1
        } else {
            2
        }
    }

    /// Levich diffusion-layer thickness δ = 1.61 D^(1/3) ν^(1/6) ω^(-1/2) (cm)
    pub fn diffusion_layer_thickness(&self) -> f64 {
        1.61 * self.transport.oxygen_diffusivity.powf(1.0 / 3.0)
            * self.transport.kinematic_viscosity.powf(1.0 / 6.0)
            * self.angular_velocity().powf(-0.5)
    }

    /// Mass-transfer coefficient m = D / δ (cm/s)
    pub fn mass_transfer_coefficient(&self) -> f64 {
        self.transport.oxygen_diffusivity / self.diffusion_layer_thickness()
    }

    /// Diffusion-limited current density n F m C (A/cm²)
    pub fn limiting_current_density(&self, n_electrons: u32) -> f64 {
        let concentration = self.transport.oxygen_concentration / 1000.0;
        f64::from(n_electrons) * FARADAY * self.mass_transfer_coefficient() * concentration
    }
}
