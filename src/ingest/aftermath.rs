//! Pine Research AfterMath CSV exports.
//!
//! AfterMath writes a free-form preamble before the column header, and
//! depending on the experiment template the time and cycle columns may be
//! missing. Missing time is rebuilt from the scan rate; missing cycle numbers
//! are rebuilt from sweep reversals.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use super::{parse_cycle, parse_number, IngestError, RawTable};

#[derive(Debug, Default)]
struct ColumnMap {
    potential: Option<usize>,
    current: Option<usize>,
    time: Option<usize>,
    cycle: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut map = Self::default();
        for (i, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();
            match h.as_str() {
                h if h.contains("potential") && map.potential.is_none() => map.potential = Some(i),
                h if h.contains("current") && map.current.is_none() => map.current = Some(i),
                h if h.contains("time") && map.time.is_none() => map.time = Some(i),
                h if h.contains("cycle") && map.cycle.is_none() => map.cycle = Some(i),
                _ => {}
            }
        }
        map
    }
}

/// Parse an AfterMath export from a file path.
///
/// `scan_rate_mv_s` is only consulted when the export has no time column.
pub fn from_path<P: AsRef<Path>>(
    path: P,
    scan_rate_mv_s: Option<f64>,
) -> Result<RawTable, IngestError> {
    let path = path.as_ref();
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    let table = from_str(&text, scan_rate_mv_s)?;
    info!(
        "Loaded {} AfterMath rows from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse an AfterMath export from any reader
pub fn from_reader<R: Read>(
    mut reader: R,
    scan_rate_mv_s: Option<f64>,
) -> Result<RawTable, IngestError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text, scan_rate_mv_s)
}

/// Parse an AfterMath export held in memory
pub fn from_str(text: &str, scan_rate_mv_s: Option<f64>) -> Result<RawTable, IngestError> {
    let header_offset = find_header_offset(text)
        .ok_or_else(|| IngestError::MissingColumn("potential".to_string()))?;
    let preamble_lines = text[..header_offset].lines().count();

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text[header_offset..].as_bytes());

    let columns = ColumnMap::from_headers(csv_reader.headers()?);
    let potential_col = columns
        .potential
        .ok_or_else(|| IngestError::MissingColumn("potential".to_string()))?;
    let current_col = columns
        .current
        .ok_or_else(|| IngestError::MissingColumn("current".to_string()))?;

    let mut potential = Vec::new();
    let mut current = Vec::new();
    let mut time = Vec::new();
    let mut cycle = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = preamble_lines
            + record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default();

        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .filter(|f| !f.is_empty())
                .ok_or_else(|| IngestError::MissingColumn(format!("{} on line {}", name, line)))
        };

        potential.push(parse_number(field(potential_col, "potential")?, line)?);
        current.push(parse_number(field(current_col, "current")?, line)?);
        if let Some(idx) = columns.time {
            time.push(parse_number(field(idx, "time")?, line)?);
        }
        if let Some(idx) = columns.cycle {
            cycle.push(parse_cycle(field(idx, "cycle")?, line)?);
        }
    }

    if potential.is_empty() {
        return Err(IngestError::Empty);
    }

    if columns.time.is_none() {
        let rate = scan_rate_mv_s.ok_or(IngestError::MissingScanRate)?;
        debug!("Deriving time axis from scan rate {} mV/s", rate);
        time = time_from_scan_rate(&potential, rate)?;
    }

    if columns.cycle.is_none() {
        warn!("AfterMath export has no cycle column, deriving cycles from sweep reversals");
        cycle = cycles_from_reversals(&potential);
    }

    RawTable::new(potential, current, cycle, time)
}

/// Byte offset of the first line that looks like the column header
fn find_header_offset(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line
            .split(',')
            .any(|field| field.to_lowercase().contains("potential"))
        {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Cumulative sweep time: distance travelled in potential over the scan rate.
///
/// The scan rate must be positive and finite.
pub fn time_from_scan_rate(
    potential: &[f64],
    scan_rate_mv_s: f64,
) -> Result<Vec<f64>, IngestError> {
    if !(scan_rate_mv_s.is_finite() && scan_rate_mv_s > 0.0) {
        return Err(IngestError::InvalidScanRate(scan_rate_mv_s));
    }
    let rate_v_s = scan_rate_mv_s / 1000.0;
    let mut time = Vec::with_capacity(potential.len());
    let mut t = 0.0;
    for (i, &e) in potential.iter().enumerate() {
        if i > 0 {
            t += (e - potential[i - 1]).abs() / rate_v_s;
        }
        time.push(t);
    }
    Ok(time)
}

/// Raw cycle numbers from sweep reversals, two reversals per cycle, starting at 1
pub fn cycles_from_reversals(potential: &[f64]) -> Vec<i64> {
    let mut cycles = Vec::with_capacity(potential.len());
    let mut direction = 0i8;
    let mut reversals = 0i64;
    for (i, &e) in potential.iter().enumerate() {
        if i > 0 {
            let prev = potential[i - 1];
            let d = if e > prev {
                1
            } else if e < prev {
                -1
            } else {
                0
            };
            if d != 0 {
                if direction != 0 && d != direction {
                    reversals += 1;
                }
                direction = d;
            }
        }
        cycles.push(1 + reversals / 2);
    }
    cycles
}
