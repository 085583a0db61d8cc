use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone)]
pub struct WriterStats {
    /// Table kind written
    pub table: &'static str,
    /// Number of rows written
    pub rows_written: usize,
    /// Number of Parquet row groups written
    pub row_groups_written: usize,
    /// Total uncompressed size of the row groups in bytes
    pub file_size_bytes: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} {} rows in {} row groups",
            self.rows_written, self.table, self.row_groups_written
        )
    }
}
