/// Errors raised when building kinetic models
#[derive(Debug, thiserror::Error)]
pub enum KineticsError {
    /// pH outside the aqueous scale
    #[error("pH {0} is outside [0, 14]")]
    PhOutOfRange(f64),

    /// A physical quantity that must be strictly positive was not
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    /// Charge transfer coefficient outside (0, 1)
    #[error("Transfer coefficient {0} is outside (0, 1)")]
    InvalidTransferCoefficient(f64),
}
