/// Errors that can occur while loading instrument exports
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// I/O error reading the export file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Base64 payload could not be decoded
    #[error("Base64 decoding error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    /// Decoded payload is not valid UTF-8 text
    #[error("Payload is not UTF-8 text: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// A required column is absent from the export
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A field could not be parsed as a number
    #[error("Invalid number {value:?} on line {line}")]
    InvalidNumber {
        /// One-based line number in the source text
        line: usize,
        /// The offending field
        value: String,
    },

    /// Column vectors of a raw table differ in length
    #[error("Column length mismatch: potential={potential}, current={current}, cycle={cycle}, time={time}")]
    LengthMismatch {
        /// Potential column length
        potential: usize,
        /// Current column length
        current: usize,
        /// Cycle column length
        cycle: usize,
        /// Time column length
        time: usize,
    },

    /// The export contains no data rows
    #[error("Export contains no data rows")]
    Empty,

    /// Time must be derived from the scan rate, but none was given
    #[error("No time column and no scan rate given")]
    MissingScanRate,

    /// Scan rate is zero, negative or not finite
    #[error("Scan rate must be positive and finite, got {0} mV/s")]
    InvalidScanRate(f64),

    /// Unknown instrument source tag
    #[error("Unknown instrument source: {0}")]
    UnknownSource(String),

    /// Malformed `data:` URL
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}
