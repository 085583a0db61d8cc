use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use parquet::arrow::ArrowWriter;

use crate::metadata::ExperimentMetadata;
use crate::schema::{TableKind, KEY_TABLE_KIND};

use super::{WriterConfig, WriterError, WriterStats};

/// Streaming Parquet writer for one exported table
pub struct TableWriter<W: Write + Send> {
    writer: ArrowWriter<W>,
    schema: Arc<Schema>,
    kind: TableKind,
    rows_written: usize,
}

impl TableWriter<File> {
    /// Create a new writer to a file path
    pub fn new_file<P: AsRef<Path>>(
        path: P,
        kind: TableKind,
        metadata: &ExperimentMetadata,
        config: WriterConfig,
    ) -> Result<Self, WriterError> {
        let file = File::create(path.as_ref())?;
        info!("Writing {} table to {}", kind.as_str(), path.as_ref().display());
        Self::new(file, kind, metadata, config)
    }
}

impl<W: Write + Send> TableWriter<W> {
    /// Create a new writer.
    ///
    /// The experiment metadata and the table kind are stored in the Parquet
    /// footer's key-value metadata.
    pub fn new(
        writer: W,
        kind: TableKind,
        metadata: &ExperimentMetadata,
        config: WriterConfig,
    ) -> Result<Self, WriterError> {
        let schema = kind.schema();
        let mut parquet_metadata = metadata.to_parquet_metadata()?;
        parquet_metadata.insert(KEY_TABLE_KIND.to_string(), kind.as_str().to_string());
        let props = config.to_writer_properties(&parquet_metadata);

        let arrow_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))?;

        Ok(Self {
            writer: arrow_writer,
            schema,
            kind,
            rows_written: 0,
        })
    }

    /// Write one record batch built for this writer's table
    pub fn write_batch(&mut self, batch: &RecordBatch) -> Result<(), WriterError> {
        if batch.schema().fields() != self.schema.fields() {
            let found = batch
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(WriterError::SchemaMismatch {
                expected: self.kind.as_str(),
                found,
            });
        }
        if batch.num_rows() == 0 {
            return Ok(());
        }

        self.writer.write(batch)?;
        self.rows_written += batch.num_rows();
        debug!("Wrote batch of {} {} rows", batch.num_rows(), self.kind.as_str());
        Ok(())
    }

    /// Rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Finish writing and close the file
    pub fn finish(self) -> Result<WriterStats, WriterError> {
        let file_metadata = self.writer.close()?;

        Ok(WriterStats {
            table: self.kind.as_str(),
            rows_written: self.rows_written,
            row_groups_written: file_metadata.row_groups.len(),
            file_size_bytes: file_metadata
                .row_groups
                .iter()
                .map(|rg| rg.total_byte_size as u64)
                .sum(),
        })
    }
}
