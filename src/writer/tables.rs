//! Record batch builders for every exported table.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt32Array, UInt64Array};
use arrow::record_batch::RecordBatch;

use crate::metadata::ExperimentMetadata;
use crate::schema::TableKind;
use crate::voltammetry::{AveragedCharge, ChargeEntry, MaxChargeSection, Sample};

use super::WriterError;

/// Wrangled samples, with the experiment context repeated on every row
pub fn samples_to_record_batch(
    samples: &[Sample],
    metadata: &ExperimentMetadata,
) -> Result<RecordBatch, WriterError> {
    let n = samples.len();
    let instrument = metadata.instrument.as_deref();

    let arrays: Vec<ArrayRef> = vec![
        Arc::new(Float64Array::from_iter_values(samples.iter().map(|s| s.potential))),
        Arc::new(Float64Array::from_iter_values(samples.iter().map(|s| s.current))),
        Arc::new(Float64Array::from_iter_values(samples.iter().map(|s| s.time))),
        Arc::new(UInt32Array::from_iter_values(samples.iter().map(|s| s.cycle))),
        Arc::new(StringArray::from_iter_values(samples.iter().map(|s| s.redox.as_str()))),
        Arc::new(UInt64Array::from_iter_values(samples.iter().map(|s| s.source_row as u64))),
        Arc::new(StringArray::from(vec![instrument; n])),
        Arc::new(Float64Array::from(vec![metadata.scan_rate; n])),
        Arc::new(Float64Array::from(vec![metadata.ph(); n])),
        Arc::new(Float64Array::from(vec![metadata.temperature(); n])),
    ];

    Ok(RecordBatch::try_new(TableKind::Samples.schema(), arrays)?)
}

/// Per-cycle charges
pub fn charges_to_record_batch(entries: &[ChargeEntry]) -> Result<RecordBatch, WriterError> {
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(UInt32Array::from_iter_values(entries.iter().map(|e| e.cycle))),
        Arc::new(StringArray::from_iter_values(entries.iter().map(|e| e.redox.as_str()))),
        Arc::new(Float64Array::from_iter_values(entries.iter().map(|e| e.anodic_charge))),
        Arc::new(Float64Array::from_iter_values(entries.iter().map(|e| e.cathodic_charge))),
        Arc::new(Float64Array::from_iter_values(entries.iter().map(|e| e.total_charge))),
    ];

    Ok(RecordBatch::try_new(TableKind::Charges.schema(), arrays)?)
}

/// Per-direction averaged charges
pub fn averaged_to_record_batch(rows: &[AveragedCharge]) -> Result<RecordBatch, WriterError> {
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.redox.as_str()))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.anodic_charge))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.anodic_charge_err))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.cathodic_charge))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.cathodic_charge_err))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.total_charge))),
        Arc::new(UInt32Array::from_iter_values(rows.iter().map(|r| r.cycles))),
    ];

    Ok(RecordBatch::try_new(TableKind::AveragedCharges.schema(), arrays)?)
}

/// Maximum-charge sections
pub fn sections_to_record_batch(sections: &[MaxChargeSection]) -> Result<RecordBatch, WriterError> {
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(UInt32Array::from_iter_values(sections.iter().map(|s| s.section as u32))),
        Arc::new(StringArray::from_iter_values(sections.iter().map(|s| s.kind.as_str()))),
        Arc::new(Float64Array::from_iter_values(sections.iter().map(|s| s.t_min))),
        Arc::new(Float64Array::from_iter_values(sections.iter().map(|s| s.t_max))),
        Arc::new(Float64Array::from_iter_values(sections.iter().map(|s| s.total_charge))),
    ];

    Ok(RecordBatch::try_new(TableKind::MaxCharges.schema(), arrays)?)
}
