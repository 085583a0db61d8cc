/// Errors that can occur while reading HILLS files
#[derive(Debug, thiserror::Error)]
pub enum HillsError {
    /// I/O error reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// No `#! FIELDS` header before the first data row
    #[error("Missing #! FIELDS header")]
    MissingFields,

    /// A later `#! FIELDS` header names different columns
    #[error("FIELDS header on line {line} differs from the first one")]
    InconsistentFields {
        /// One-based line number
        line: usize,
    },

    /// A data row has the wrong number of values
    #[error("Line {line} has {found} values, expected {expected}")]
    RowWidth {
        /// One-based line number
        line: usize,
        /// Number of declared fields
        expected: usize,
        /// Number of values on the line
        found: usize,
    },

    /// A value could not be parsed as a number
    #[error("Invalid number {value:?} on line {line}")]
    InvalidNumber {
        /// One-based line number
        line: usize,
        /// The offending token
        value: String,
    },

    /// A required column is not declared in the header
    #[error("Missing column: {0}")]
    MissingColumn(String),
}
