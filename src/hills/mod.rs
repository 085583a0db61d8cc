//! # Metadynamics HILLS Files
//!
//! Reader for the `HILLS` files PLUMED writes during metadynamics runs, with
//! per-walker extraction for multiple-walker simulations.
//!
//! ```
//! use echem_analytics::hills::HillsFile;
//!
//! let text = "#! FIELDS time cv sigma_cv height biasf\n\
//!             #! SET multivariate false\n\
//!             1.0 0.5 0.1 1.2 10\n\
//!             1.0 0.7 0.1 1.1 10\n";
//! let hills = HillsFile::from_reader(text.as_bytes())?;
//! let walkers = hills.walker_series(2)?;
//! assert_eq!(walkers.len(), 2);
//! # Ok::<(), echem_analytics::hills::HillsError>(())
//! ```

mod error;
mod parser;
mod walkers;

#[cfg(test)]
mod tests;

pub use error::HillsError;
pub use parser::HillsFile;
pub use walkers::WalkerSeries;
