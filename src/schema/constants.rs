/// Export format version - follows semantic versioning
pub const FORMAT_VERSION: &str = "1.0.0";

/// File extension for exported tables
pub const TABLE_EXTENSION: &str = ".parquet";

/// Metadata key for format version in Parquet footer
pub const KEY_FORMAT_VERSION: &str = "echem:format_version";

/// Metadata key for processing timestamp
pub const KEY_PROCESSING_TIMESTAMP: &str = "echem:processing_timestamp";

/// Metadata key for software info
pub const KEY_SOFTWARE: &str = "echem:software";

/// Metadata key for experiment metadata (JSON)
pub const KEY_EXPERIMENT_METADATA: &str = "echem:experiment_metadata";

/// Metadata key naming which table a file holds
pub const KEY_TABLE_KIND: &str = "echem:table";
