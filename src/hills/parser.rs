use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

use super::HillsError;

const FIELDS_DIRECTIVE: &str = "#! FIELDS";
const SET_DIRECTIVE: &str = "#! SET";

/// A parsed PLUMED HILLS file, stored column-major
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HillsFile {
    fields: Vec<String>,
    constants: BTreeMap<String, String>,
    columns: Vec<Vec<f64>>,
}

impl HillsFile {
    /// Read a HILLS file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, HillsError> {
        let file = File::open(path.as_ref())?;
        let hills = Self::from_reader(file)?;
        info!(
            "Read {} hills with {} fields from {}",
            hills.len(),
            hills.fields.len(),
            path.as_ref().display()
        );
        Ok(hills)
    }

    /// Parse HILLS text from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, HillsError> {
        let mut hills = Self::default();
        let mut has_header = false;

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix(FIELDS_DIRECTIVE) {
                let fields: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
                if !has_header {
                    hills.columns = vec![Vec::new(); fields.len()];
                    hills.fields = fields;
                    has_header = true;
                } else if fields != hills.fields {
                    return Err(HillsError::InconsistentFields { line: line_no });
                }
                continue;
            }
            if let Some(rest) = trimmed.strip_prefix(SET_DIRECTIVE) {
                let mut parts = rest.split_whitespace();
                if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
                    hills.constants.insert(key.to_string(), value.to_string());
                }
                continue;
            }
            if trimmed.starts_with('#') {
                continue;
            }

            if !has_header {
                return Err(HillsError::MissingFields);
            }
            let values: Vec<&str> = trimmed.split_whitespace().collect();
            if values.len() != hills.fields.len() {
                return Err(HillsError::RowWidth {
                    line: line_no,
                    expected: hills.fields.len(),
                    found: values.len(),
                });
            }
            for (column, value) in hills.columns.iter_mut().zip(values) {
                let number = value.parse::<f64>().map_err(|_| HillsError::InvalidNumber {
                    line: line_no,
                    value: value.to_string(),
                })?;
                column.push(number);
            }
        }

        if !has_header {
            return Err(HillsError::MissingFields);
        }
        debug!("Parsed {} HILLS rows", hills.len());
        Ok(hills)
    }

    /// Column names in header order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// `#! SET` constants
    pub fn constants(&self) -> &BTreeMap<String, String> {
        &self.constants
    }

    /// Number of hills
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// True if the file holds no hills
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of one column by name
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        self.column_slice(name).map(<[f64]>::to_vec)
    }

    pub(crate) fn column_slice(&self, name: &str) -> Option<&[f64]> {
        self.fields
            .iter()
            .position(|f| f == name)
            .map(|i| self.columns[i].as_slice())
    }
}
