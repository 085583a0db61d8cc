use crate::ingest::IngestError;

use super::sample::Redox;

/// Errors that can occur in the voltammetry pipeline
#[derive(Debug, thiserror::Error)]
pub enum VoltammetryError {
    /// The raw export could not be loaded
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// An argument was outside its accepted set (e.g., an unknown redox name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Too few samples survived wrangling to form a voltammogram
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// No samples carry the requested (cycle, redox) labels
    #[error("No samples for cycle {cycle} ({redox})")]
    SegmentNotFound {
        /// Requested cycle
        cycle: u32,
        /// Requested redox direction
        redox: Redox,
    },

    /// Maximum-charge section index out of range
    #[error("No maximum-charge section {0}")]
    SectionNotFound(usize),
}
