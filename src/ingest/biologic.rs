//! BioLogic EC-Lab text exports.
//!
//! The export carries potential, current, cycle number and time columns,
//! usually under a header row. A first row that does not parse as numbers is
//! taken as the header; otherwise it is data. EC-Lab writes tab separated
//! files, but hand edited files frequently use runs of spaces, so both are
//! accepted.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use super::{parse_cycle, parse_number, IngestError, RawTable};

/// Parse a BioLogic export from a file path
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RawTable, IngestError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = from_reader(BufReader::new(file))?;
    info!(
        "Loaded {} BioLogic rows from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse a BioLogic export from any reader
pub fn from_reader<R: Read>(reader: R) -> Result<RawTable, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = RawTable::default();
    let mut first_row = true;

    for record in csv_reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();

        // Whitespace separated rows arrive as a single field
        let fields: Vec<&str> = if record.len() == 1 {
            record[0].split_whitespace().collect()
        } else {
            record.iter().filter(|f| !f.is_empty()).collect()
        };

        if fields.is_empty() {
            continue;
        }
        if std::mem::take(&mut first_row)
            && fields.iter().any(|f| f.parse::<f64>().is_err())
        {
            debug!("Skipping BioLogic header on line {}", line);
            continue;
        }
        if fields.len() < 4 {
            return Err(IngestError::MissingColumn(format!(
                "expected potential, current, cycle and time on line {}, found {} fields",
                line,
                fields.len()
            )));
        }

        let potential = parse_number(fields[0], line)?;
        let current = parse_number(fields[1], line)?;
        let cycle = parse_cycle(fields[2], line)?;
        let time = parse_number(fields[3], line)?;

        table.push(potential, current, cycle, time);
    }

    debug!("BioLogic parser produced {} rows", table.len());
    table.validate()?;
    Ok(table)
}
