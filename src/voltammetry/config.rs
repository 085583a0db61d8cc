use serde::{Deserialize, Serialize};

/// Options for turning a raw table into labelled samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrangleConfig {
    /// Keep rows the instrument labelled as cycle 1 (usually a conditioning
    /// sweep). Dropped when false.
    pub keep_first_cycle: bool,

    /// Samples whose raw row index is within this many rows of the first
    /// retained row are discarded as start-up transients
    pub skip_window: usize,
}

impl Default for WrangleConfig {
    fn default() -> Self {
        Self {
            keep_first_cycle: false,
            skip_window: 5,
        }
    }
}

impl WrangleConfig {
    /// Set whether the instrument's first cycle is kept
    pub fn with_keep_first_cycle(mut self, keep: bool) -> Self {
        self.keep_first_cycle = keep;
        self
    }

    /// Set the start-up skip window (rows)
    pub fn with_skip_window(mut self, rows: usize) -> Self {
        self.skip_window = rows;
        self
    }
}
