//! # Experiment Metadata Module
//!
//! Explicit, key-enumerated experiment context: the electrolyte (ions, pH,
//! temperature), the instrument and the scan rate. The metadata travels with a
//! [`crate::voltammetry::CyclicVoltammogram`] and is embedded in the footer of
//! every exported Parquet table.

mod electrolyte;
mod error;
mod experiment;

#[cfg(test)]
mod tests;

pub use electrolyte::Electrolyte;
pub use error::MetadataError;
pub use experiment::ExperimentMetadata;
