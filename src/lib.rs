//! # echem-analytics - Electrochemistry Data Analysis
//!
//! `echem_analytics` turns raw potentiostat exports into cyclic voltammetry
//! results: reconstructed cycles, redox-labelled samples and the charge passed
//! per cycle and sweep direction.
//!
//! ## Key Features
//!
//! - **Instrument Ingest**: BioLogic text and Pine AfterMath CSV exports, plus
//!   base64 uploads from web forms.
//!
//! - **Cycle Reconstruction**: Cycles are rebuilt from potential extrema, so
//!   results do not depend on how the instrument numbered its cycles.
//!
//! - **Charge Integration**: Simpson's rule on irregular time steps, with
//!   interpolated zero crossings closing every integrated region.
//!
//! - **Self-Describing Export**: Parquet tables carrying the experiment
//!   metadata in the file footer.
//!
//! - **Companion Models**: Rotating-disk oxygen reduction kinetics and a PLUMED
//!   HILLS reader for metadynamics runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use echem_analytics::prelude::*;
//!
//! let metadata = ExperimentMetadata::new()
//!     .with_electrolyte(Electrolyte::new("Na+", "Cl-", 7.0, 298.15))
//!     .with_scan_rate(50.0);
//!
//! let cv = CyclicVoltammogram::from_biologic_path(
//!     "cv_run.txt",
//!     metadata,
//!     WrangleConfig::default(),
//! )?;
//!
//! for row in cv.averaged_charge_passed() {
//!     println!(
//!         "{}: {:.3e} ± {:.1e} C anodic",
//!         row.redox, row.anodic_charge, row.anodic_charge_err
//!     );
//! }
//! # Ok::<(), echem_analytics::voltammetry::VoltammetryError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`ingest`]: Instrument export loaders producing a uniform raw table
//! - [`voltammetry`]: Cycle reconstruction, redox labelling and charge integration
//! - [`metadata`]: Electrolyte and experiment context
//! - [`kinetics`]: Levich transport and Butler-Volmer rate laws
//! - [`hills`]: PLUMED HILLS parsing and per-walker series
//! - [`schema`]: Arrow schemas of the exported tables
//! - [`writer`]: Parquet writer with footer metadata
//!
//! ## File Footer Metadata
//!
//! - `echem:format_version`: Format version string
//! - `echem:software`: Writing software and version
//! - `echem:processing_timestamp`: RFC 3339 write time
//! - `echem:experiment_metadata`: Experiment metadata as JSON
//! - `echem:table`: Which table the file holds

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod hills;
pub mod ingest;
pub mod kinetics;
pub mod metadata;
pub mod schema;
pub mod voltammetry;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::hills::{HillsFile, WalkerSeries};
    pub use crate::ingest::{InstrumentSource, RawTable};
    pub use crate::kinetics::{
        koutecky_levich, ButlerVolmer, OxygenReductionModel, TransportProperties,
    };
    pub use crate::metadata::{Electrolyte, ExperimentMetadata};
    pub use crate::schema::{columns, TableKind, FORMAT_VERSION};
    pub use crate::voltammetry::{
        AveragedCharge, ChargeEntry, ChargeKind, ChargeReport, CyclicVoltammogram,
        IntegrationTrace, MaxChargeSection, Redox, Sample, Valence, WrangleConfig,
    };
    pub use crate::writer::{TableSummary, TableWriter, WriterConfig, WriterStats};
}
