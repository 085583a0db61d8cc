//! # Kinetic Models
//!
//! Rotating-disk transport and electron-transfer rate laws used alongside
//! voltammetry results, centred on oxygen reduction in aqueous electrolyte.
//!
//! ```
//! use echem_analytics::kinetics::{OxygenReductionModel, TransportProperties};
//! use echem_analytics::metadata::Electrolyte;
//!
//! let electrolyte = Electrolyte::new("Na+", "Cl-", 7.0, 298.0);
//! let model = OxygenReductionModel::new(&electrolyte, TransportProperties::default(), 1600.0)?;
//! assert_eq!(model.water_stoichiometry(), 2);
//! # Ok::<(), echem_analytics::kinetics::KineticsError>(())
//! ```

mod error;
mod orr;
mod rates;
mod transport;


pub use error::KineticsError;
pub use orr::OxygenReductionModel;
pub use rates::{koutecky_levich, ButlerVolmer};
pub use transport::TransportProperties;

/// Faraday constant (C/mol)
pub const FARADAY: f64 = 96485.33212;

/// Molar gas constant (J/(mol·K))
pub const GAS_CONSTANT: f64 = 8.314462618;
