//! # Cyclic Voltammetry Module
//!
//! Turns a raw potentiostat table into labelled samples and integrates the
//! charge passed per cycle and sweep direction.
//!
//! ## Pipeline
//!
//! 1. **Reconstruct cycles** from potential extrema of each raw cycle, so the
//!    numbering does not depend on how the instrument counted.
//! 2. **Label redox** per sample: falling potential is reduction, anything
//!    else oxidation.
//! 3. **Skip** the start-up transient rows.
//! 4. **Duplicate** each cycle's turning-point sample so the oxidation and
//!    reduction segments share an endpoint.
//! 5. **Integrate** positive and negative current of every interior segment
//!    with Simpson's rule, closing each subset at an interpolated zero
//!    crossing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use echem_analytics::metadata::{Electrolyte, ExperimentMetadata};
//! use echem_analytics::voltammetry::{CyclicVoltammogram, WrangleConfig};
//!
//! let metadata = ExperimentMetadata::new()
//!     .with_electrolyte(Electrolyte::new("Na+", "Cl-", 7.0, 298.15));
//! let mut cv = CyclicVoltammogram::from_biologic_path(
//!     "cv_run.txt",
//!     metadata,
//!     WrangleConfig::default(),
//! )?;
//!
//! cv.drop_cycles(&[3]);
//! for entry in cv.charge_passed() {
//!     println!("{} {}: {:.3e} C", entry.cycle, entry.redox, entry.total_charge);
//! }
//! # Ok::<(), echem_analytics::voltammetry::VoltammetryError>(())
//! ```

mod charge;
mod config;
mod error;
mod integrate;
mod sample;
mod wrangle;


use std::path::Path;

use log::info;

use crate::ingest::{self, InstrumentSource, RawTable};
use crate::metadata::ExperimentMetadata;

pub use charge::{AveragedCharge, ChargeEntry, ChargeReport, MaxChargeSection};
pub use config::WrangleConfig;
pub use error::VoltammetryError;
pub use integrate::{simpson, zero_crossing, IntegrationTrace};
pub use sample::{ChargeKind, Redox, Sample, Valence};

/// A wrangled cyclic voltammogram with its experiment context.
///
/// Labels are fixed at construction; [`drop_cycles`](Self::drop_cycles) is
/// the only mutation and it only removes samples.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicVoltammogram {
    samples: Vec<Sample>,
    metadata: ExperimentMetadata,
    config: WrangleConfig,
}

impl CyclicVoltammogram {
    /// Wrangle a raw table
    pub fn new(
        table: &RawTable,
        metadata: ExperimentMetadata,
        config: WrangleConfig,
    ) -> Result<Self, VoltammetryError> {
        let samples = wrangle::wrangle(table, &config)?;
        Ok(Self {
            samples,
            metadata,
            config,
        })
    }

    /// Wrangle a raw table with default options and no metadata
    pub fn from_table(table: &RawTable) -> Result<Self, VoltammetryError> {
        Self::new(table, ExperimentMetadata::default(), WrangleConfig::default())
    }

    /// Load and wrangle a BioLogic text export
    pub fn from_biologic_path<P: AsRef<Path>>(
        path: P,
        metadata: ExperimentMetadata,
        config: WrangleConfig,
    ) -> Result<Self, VoltammetryError> {
        let table = ingest::biologic::from_path(path)?;
        Self::new(&table, metadata, config)
    }

    /// Load and wrangle an AfterMath CSV export.
    ///
    /// The metadata scan rate is used to derive time when the export has no
    /// time column.
    pub fn from_aftermath_path<P: AsRef<Path>>(
        path: P,
        metadata: ExperimentMetadata,
        config: WrangleConfig,
    ) -> Result<Self, VoltammetryError> {
        let table = ingest::aftermath::from_path(path, metadata.scan_rate)?;
        Self::new(&table, metadata, config)
    }

    /// Decode and wrangle a base64 upload (`data:` URL or bare payload)
    pub fn from_base64(
        contents: &str,
        source: InstrumentSource,
        metadata: ExperimentMetadata,
        config: WrangleConfig,
    ) -> Result<Self, VoltammetryError> {
        let table = ingest::from_base64(contents, source, metadata.scan_rate)?;
        info!("Decoded {} rows from {} upload", table.len(), source);
        Self::new(&table, metadata, config)
    }

    /// Wrangled samples in pipeline order
    pub fn wrangled_data(&self) -> &[Sample] {
        &self.samples
    }

    /// Experiment metadata
    pub fn metadata(&self) -> &ExperimentMetadata {
        &self.metadata
    }

    /// Options the voltammogram was wrangled with
    pub fn config(&self) -> &WrangleConfig {
        &self.config
    }

    /// Distinct cycle ids present, ascending
    pub fn cycles(&self) -> Vec<u32> {
        let mut cycles: Vec<u32> = self.samples.iter().map(|s| s.cycle).collect();
        cycles.sort_unstable();
        cycles.dedup();
        cycles
    }

    /// Remove every sample labelled with one of `cycles`
    pub fn drop_cycles(&mut self, cycles: &[u32]) -> &mut Self {
        let before = self.samples.len();
        self.samples.retain(|s| !cycles.contains(&s.cycle));
        info!(
            "Dropped cycles {:?} ({} samples)",
            cycles,
            before - self.samples.len()
        );
        self
    }

    /// Per-cycle charges, or their per-direction averages
    pub fn get_charge_passed(&self, average_segments: bool) -> ChargeReport {
        if average_segments {
            ChargeReport::Averaged(self.averaged_charge_passed())
        } else {
            ChargeReport::PerCycle(self.charge_passed())
        }
    }

    /// One entry per interior (cycle, redox) segment, oxidation first
    pub fn charge_passed(&self) -> Vec<ChargeEntry> {
        charge::charges_passed(&self.samples)
    }

    /// Mean and standard error of the per-cycle charges, per redox direction
    pub fn averaged_charge_passed(&self) -> Vec<AveragedCharge> {
        charge::average_charges(&self.charge_passed())
    }

    /// Charge of every maximal same-sign current run
    pub fn get_maximum_charges_passed(&self) -> Vec<MaxChargeSection> {
        charge::maximum_charge_sections(&self.samples)
            .into_iter()
            .map(|(section, _)| section)
            .collect()
    }

    /// Arrays integrated for one maximum-charge section
    pub fn maximum_charge_trace(
        &self,
        section: usize,
    ) -> Result<IntegrationTrace, VoltammetryError> {
        charge::maximum_charge_sections(&self.samples)
            .into_iter()
            .nth(section)
            .map(|(_, trace)| trace)
            .ok_or(VoltammetryError::SectionNotFound(section))
    }

    /// Arrays integrated for one (cycle, redox, valence) charge
    pub fn charge_integration_trace(
        &self,
        cycle: u32,
        redox: Redox,
        valence: Valence,
    ) -> Result<IntegrationTrace, VoltammetryError> {
        let segment = charge::segment_samples(&self.samples, cycle, redox);
        if segment.is_empty() {
            return Err(VoltammetryError::SegmentNotFound { cycle, redox });
        }
        Ok(integrate::integrate_segment(&segment, redox, valence))
    }

    /// Electrolyte pH
    pub fn ph(&self) -> Option<f64> {
        self.metadata.ph()
    }

    /// Electrolyte temperature (K)
    pub fn temperature(&self) -> Option<f64> {
        self.metadata.temperature()
    }

    /// Electrolyte cation
    pub fn cation(&self) -> Option<&str> {
        self.metadata.electrolyte.as_ref().map(|e| e.cation.as_str())
    }

    /// Electrolyte anion
    pub fn anion(&self) -> Option<&str> {
        self.metadata.electrolyte.as_ref().map(|e| e.anion.as_str())
    }
}
