use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{HillsError, HillsFile};

/// Hill deposition history of one walker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkerSeries {
    /// Deposition times, rounded
    pub time: Vec<f64>,
    /// Hill heights
    pub height: Vec<f64>,
}

impl HillsFile {
    /// Split a multiple-walker HILLS file into per-walker series.
    ///
    /// Walkers deposit at the same times, so rows are grouped by time rounded
    /// to `round_decimals` places and numbered 0, 1, 2, ... in file order
    /// within each group.
    pub fn walker_series(
        &self,
        round_decimals: u32,
    ) -> Result<BTreeMap<usize, WalkerSeries>, HillsError> {
        let time = self
            .column_slice("time")
            .ok_or_else(|| HillsError::MissingColumn("time".to_string()))?;
        let height = self
            .column_slice("height")
            .ok_or_else(|| HillsError::MissingColumn("height".to_string()))?;

        let scale = 10f64.powi(round_decimals as i32);
        let mut seen: HashMap<i64, usize> = HashMap::new();
        let mut walkers: BTreeMap<usize, WalkerSeries> = BTreeMap::new();

        for (&t, &h) in time.iter().zip(height) {
            let key = (t * scale).round();
            let walker = seen.entry(key as i64).or_insert(0);
            let series = walkers.entry(*walker).or_default();
            series.time.push(key / scale);
            series.height.push(h);
            *walker += 1;
        }

        Ok(walkers)
    }
}
