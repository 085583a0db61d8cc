//! # Instrument Ingest Module
//!
//! Loaders that turn vendor exports into a uniform [`RawTable`] of potential,
//! current, cycle and time columns, ready for the voltammetry pipeline.
//!
//! ## Supported Sources
//!
//! - **BioLogic**: EC-Lab text export, tab or whitespace separated
//! - **AfterMath**: Pine Research CSV export with preamble
//! - **Base64 uploads**: `data:` URLs from web forms, tagged with an
//!   [`InstrumentSource`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use echem_analytics::ingest::{biologic, from_base64, InstrumentSource};
//!
//! let table = biologic::from_path("cv_run.txt")?;
//! println!("{} rows", table.len());
//!
//! let upload = "data:text/plain;base64,...";
//! let table = from_base64(upload, InstrumentSource::Biologic, None)?;
//! # Ok::<(), echem_analytics::ingest::IngestError>(())
//! ```

pub mod aftermath;
pub mod biologic;
mod data_url;
mod error;
mod source;
mod table;


pub use data_url::{decode_data_url, from_base64};
pub use error::IngestError;
pub use source::InstrumentSource;
pub use table::RawTable;

/// Parse one numeric field, reporting the source line on failure
pub(crate) fn parse_number(value: &str, line: usize) -> Result<f64, IngestError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| IngestError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

/// Parse a cycle number field. Instruments write it as a float
/// (`1.000E+000`), so it is rounded; `nan` and infinities are rejected.
pub(crate) fn parse_cycle(value: &str, line: usize) -> Result<i64, IngestError> {
    let cycle = parse_number(value, line)?;
    if !cycle.is_finite() {
        return Err(IngestError::InvalidNumber {
            line,
            value: value.to_string(),
        });
    }
    Ok(cycle.round() as i64)
}
