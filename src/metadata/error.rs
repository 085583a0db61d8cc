/// Errors that can occur during metadata processing
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}
