use super::IngestError;

/// Uniform four-column table produced by every instrument loader.
///
/// Rows keep the order they had in the export; the row position is the
/// provenance index carried into the wrangled samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Working electrode potential (V)
    pub potential: Vec<f64>,
    /// Current (A)
    pub current: Vec<f64>,
    /// Cycle number as written by the instrument
    pub cycle: Vec<i64>,
    /// Time (s)
    pub time: Vec<f64>,
}

impl RawTable {
    /// Build a table from column vectors, rejecting ragged or empty input
    pub fn new(
        potential: Vec<f64>,
        current: Vec<f64>,
        cycle: Vec<i64>,
        time: Vec<f64>,
    ) -> Result<Self, IngestError> {
        let table = Self {
            potential,
            current,
            cycle,
            time,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check that all columns have the same, non-zero length
    pub fn validate(&self) -> Result<(), IngestError> {
        let n = self.potential.len();
        if self.current.len() != n || self.cycle.len() != n || self.time.len() != n {
            return Err(IngestError::LengthMismatch {
                potential: n,
                current: self.current.len(),
                cycle: self.cycle.len(),
                time: self.time.len(),
            });
        }
        if n == 0 {
            return Err(IngestError::Empty);
        }
        Ok(())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.potential.len()
    }

    /// True if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.potential.is_empty()
    }

    pub(crate) fn push(&mut self, potential: f64, current: f64, cycle: i64, time: f64) {
        self.potential.push(potential);
        self.current.push(current);
        self.cycle.push(cycle);
        self.time.push(time);
    }
}
