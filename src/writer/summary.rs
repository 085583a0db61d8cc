use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::Path;

use arrow::datatypes::SchemaRef;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::metadata::ExperimentMetadata;
use crate::schema::{KEY_FORMAT_VERSION, KEY_SOFTWARE, KEY_TABLE_KIND};

use super::WriterError;

/// Footer-level description of an exported table
#[derive(Debug, Clone)]
pub struct TableSummary {
    /// Arrow schema stored in the file
    pub schema: SchemaRef,
    /// Total rows across row groups
    pub num_rows: i64,
    /// Number of row groups
    pub num_row_groups: usize,
    /// Footer key-value metadata
    pub key_value_metadata: HashMap<String, String>,
}

impl TableSummary {
    /// Read the footer of an exported Parquet file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WriterError> {
        let file = File::open(path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let file_metadata = builder.metadata().file_metadata();

        let key_value_metadata = file_metadata
            .key_value_metadata()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|kv| kv.value.clone().map(|v| (kv.key.clone(), v)))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            schema: builder.schema().clone(),
            num_rows: file_metadata.num_rows(),
            num_row_groups: builder.metadata().num_row_groups(),
            key_value_metadata,
        })
    }

    /// Table kind recorded by the writer
    pub fn table_kind(&self) -> Option<&str> {
        self.key_value_metadata.get(KEY_TABLE_KIND).map(String::as_str)
    }

    /// Experiment metadata recorded by the writer
    pub fn experiment_metadata(&self) -> Result<ExperimentMetadata, WriterError> {
        Ok(ExperimentMetadata::from_parquet_metadata(&self.key_value_metadata)?)
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let get = |key: &str| {
            self.key_value_metadata
                .get(key)
                .map(String::as_str)
                .unwrap_or("unknown")
        };
        writeln!(f, "Table:          {}", self.table_kind().unwrap_or("unknown"))?;
        writeln!(f, "Format version: {}", get(KEY_FORMAT_VERSION))?;
        writeln!(f, "Software:       {}", get(KEY_SOFTWARE))?;
        writeln!(f, "Rows:           {}", self.num_rows)?;
        writeln!(f, "Row groups:     {}", self.num_row_groups)?;
        writeln!(f, "Columns:")?;
        for field in self.schema.fields() {
            let nullable = if field.is_nullable() { " (nullable)" } else { "" };
            writeln!(f, "  {:<20} {}{}", field.name(), field.data_type(), nullable)?;
        }
        Ok(())
    }
}
