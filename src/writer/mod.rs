//! # Table Writer Module
//!
//! Writes voltammetry results to Parquet. Every file is self-describing:
//! the experiment metadata, format version and table kind live in the
//! footer's key-value metadata.
//!
//! ## Example
//!
//! ```rust,no_run
//! use echem_analytics::schema::TableKind;
//! use echem_analytics::voltammetry::CyclicVoltammogram;
//! use echem_analytics::writer::{charges_to_record_batch, TableWriter, WriterConfig};
//! # fn run(cv: &CyclicVoltammogram) -> Result<(), Box<dyn std::error::Error>> {
//!
//! let batch = charges_to_record_batch(&cv.charge_passed())?;
//! let mut writer = TableWriter::new_file(
//!     "charges.parquet",
//!     TableKind::Charges,
//!     cv.metadata(),
//!     WriterConfig::default(),
//! )?;
//! writer.write_batch(&batch)?;
//! println!("{}", writer.finish()?);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod stats;
mod summary;
mod tables;
mod writer_impl;


pub use config::{CompressionType, WriterConfig};
pub use error::WriterError;
pub use stats::WriterStats;
pub use summary::TableSummary;
pub use tables::{
    averaged_to_record_batch, charges_to_record_batch, samples_to_record_batch,
    sections_to_record_batch,
};
pub use writer_impl::TableWriter;
