use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;
use log::info;
use std::path::{Path, PathBuf};

use echem_analytics::metadata::ExperimentMetadata;
use echem_analytics::schema::{TableKind, TABLE_EXTENSION};
use echem_analytics::writer::{
    averaged_to_record_batch, charges_to_record_batch, samples_to_record_batch,
    sections_to_record_batch, TableWriter, WriterConfig,
};

use super::config::Config;
use super::{heading, load_voltammogram, InputArgs};

pub fn run(
    input: &InputArgs,
    config: &Config,
    output_dir: PathBuf,
    compression_level: Option<i32>,
    row_group_size: Option<usize>,
) -> Result<()> {
    let cv = load_voltammogram(input, config)?;

    let mut writer_config = WriterConfig::default();
    if let Some(level) = compression_level.or(config.export.compression_level) {
        writer_config = writer_config.with_zstd_level(level);
    }
    if let Some(rows) = row_group_size.or(config.export.row_group_size) {
        writer_config = writer_config.with_row_group_size(rows);
    }

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    info!("Exporting to {}", output_dir.display());

    let metadata = cv.metadata();
    let tables = [
        (
            TableKind::Samples,
            samples_to_record_batch(cv.wrangled_data(), metadata)?,
        ),
        (
            TableKind::Charges,
            charges_to_record_batch(&cv.charge_passed())?,
        ),
        (
            TableKind::AveragedCharges,
            averaged_to_record_batch(&cv.averaged_charge_passed())?,
        ),
        (
            TableKind::MaxCharges,
            sections_to_record_batch(&cv.get_maximum_charges_passed())?,
        ),
    ];

    println!("{}", heading("Export complete"));
    for (kind, batch) in &tables {
        let path = output_dir.join(format!("{}{}", kind.as_str(), TABLE_EXTENSION));
        write_table(&path, *kind, batch, metadata, writer_config.clone())?;
    }
    Ok(())
}

fn write_table(
    path: &Path,
    kind: TableKind,
    batch: &RecordBatch,
    metadata: &ExperimentMetadata,
    config: WriterConfig,
) -> Result<()> {
    let mut writer = TableWriter::new_file(path, kind, metadata, config)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    writer
        .write_batch(batch)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    let stats = writer
        .finish()
        .with_context(|| format!("Failed to finalize {}", path.display()))?;

    println!("  {}: {}", path.display(), stats);
    Ok(())
}
