use std::collections::HashMap;

use parquet::basic::{Compression, Encoding, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;
use parquet::schema::types::ColumnPath;
use serde::{Deserialize, Serialize};

use crate::schema::columns;

/// Compression options for exported tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionType {
    /// ZSTD at the given level
    Zstd(i32),
    /// Snappy compression
    Snappy,
    /// No compression
    Uncompressed,
}

impl Default for CompressionType {
    fn default() -> Self {
        Self::Zstd(3)
    }
}

/// Configuration for [`TableWriter`](super::TableWriter)
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Compression type to use
    pub compression: CompressionType,

    /// Maximum rows per row group
    pub row_group_size: usize,

    /// Data page size in bytes
    pub data_page_size: usize,

    /// Whether to write column chunk statistics
    pub write_statistics: bool,

    /// Use BYTE_STREAM_SPLIT for the measured float columns
    pub use_byte_stream_split: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: CompressionType::Zstd(3),
            // Voltammograms are small; one group holds a typical run
            row_group_size: 1_000_000,
            data_page_size: 1024 * 1024,
            write_statistics: true,
            use_byte_stream_split: true,
        }
    }
}

impl WriterConfig {
    /// Configuration optimized for fast writing (larger files)
    pub fn fast_write() -> Self {
        Self {
            compression: CompressionType::Snappy,
            use_byte_stream_split: false,
            ..Self::default()
        }
    }

    /// Set ZSTD compression at `level`
    pub fn with_zstd_level(mut self, level: i32) -> Self {
        self.compression = CompressionType::Zstd(level);
        self
    }

    /// Set the maximum row group size
    pub fn with_row_group_size(mut self, rows: usize) -> Self {
        self.row_group_size = rows;
        self
    }

    /// Create writer properties from this configuration
    pub(super) fn to_writer_properties(
        &self,
        metadata: &HashMap<String, String>,
    ) -> WriterProperties {
        let compression = match self.compression {
            CompressionType::Zstd(level) => {
                Compression::ZSTD(ZstdLevel::try_new(level).unwrap_or(ZstdLevel::default()))
            }
            CompressionType::Snappy => Compression::SNAPPY,
            CompressionType::Uncompressed => Compression::UNCOMPRESSED,
        };

        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        let mut builder = WriterProperties::builder()
            .set_compression(compression)
            .set_data_page_size_limit(self.data_page_size)
            .set_statistics_enabled(statistics)
            .set_max_row_group_size(self.row_group_size.max(1));

        // Low-cardinality labels repeat on every row
        for col in [columns::REDOX, columns::KIND, columns::INSTRUMENT, columns::CYCLE] {
            builder = builder
                .set_column_dictionary_enabled(ColumnPath::new(vec![col.to_string()]), true);
        }

        let float_columns = [columns::POTENTIAL, columns::CURRENT, columns::TIME];
        for col in float_columns {
            builder = builder
                .set_column_dictionary_enabled(ColumnPath::new(vec![col.to_string()]), false);
        }
        if self.use_byte_stream_split {
            for col in float_columns {
                builder = builder.set_column_encoding(
                    ColumnPath::new(vec![col.to_string()]),
                    Encoding::BYTE_STREAM_SPLIT,
                );
            }
        }

        let kv_metadata: Vec<KeyValue> = metadata
            .iter()
            .map(|(k, v)| KeyValue {
                key: k.clone(),
                value: Some(v.clone()),
            })
            .collect();

        builder = builder.set_key_value_metadata(Some(kv_metadata));

        builder.build()
    }
}
