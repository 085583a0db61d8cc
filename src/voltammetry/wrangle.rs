//! Raw table to labelled samples: cycle reconstruction, redox labelling,
//! start-up skip window and turning-point duplication.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::ingest::RawTable;

use super::config::WrangleConfig;
use super::sample::{Redox, Sample};
use super::VoltammetryError;

/// A raw table row that survived filtering
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawRow {
    pub potential: f64,
    pub current: f64,
    pub raw_cycle: i64,
    pub time: f64,
    pub source_row: usize,
}

/// Run the full wrangling pipeline over a raw table
pub(crate) fn wrangle(
    table: &RawTable,
    config: &WrangleConfig,
) -> Result<Vec<Sample>, VoltammetryError> {
    table.validate()?;

    let mut rows = finite_rows(table);
    let dropped = table.len() - rows.len();
    if dropped > 0 {
        warn!("Dropped {} rows with non-finite values", dropped);
    }

    if !config.keep_first_cycle {
        rows.retain(|row| row.raw_cycle != 1);
    }
    if rows.is_empty() {
        return Err(VoltammetryError::InsufficientData(
            "no rows left after filtering the raw table".to_string(),
        ));
    }

    // Stable: rows with equal (cycle, time) keep their file order
    rows.sort_by(|a, b| {
        a.raw_cycle
            .cmp(&b.raw_cycle)
            .then_with(|| a.time.total_cmp(&b.time))
    });

    let cycles = reconstruct_cycles(&rows);
    let mut samples: Vec<Sample> = rows
        .iter()
        .zip(cycles)
        .map(|(row, cycle)| Sample {
            potential: row.potential,
            current: row.current,
            time: row.time,
            cycle,
            redox: Redox::Oxidation,
            source_row: row.source_row,
        })
        .collect();
    debug!("Reconstructed {} samples", samples.len());

    label_redox(&mut samples);
    apply_skip_window(&mut samples, config.skip_window);
    let samples = duplicate_endpoints(samples);

    if samples.is_empty() {
        return Err(VoltammetryError::InsufficientData(format!(
            "no samples left after the {}-row skip window",
            config.skip_window
        )));
    }
    debug!("Wrangled {} samples", samples.len());

    Ok(samples)
}

fn finite_rows(table: &RawTable) -> Vec<RawRow> {
    (0..table.len())
        .filter(|&i| {
            table.potential[i].is_finite() && table.current[i].is_finite() && table.time[i].is_finite()
        })
        .map(|i| RawRow {
            potential: table.potential[i],
            current: table.current[i],
            raw_cycle: table.cycle[i],
            time: table.time[i],
            source_row: i,
        })
        .collect()
}

/// Assign reconstructed cycles to rows already sorted by (raw cycle, time).
///
/// A single counter runs over the whole table and steps once for every row
/// sitting at its raw cycle's potential maximum or minimum; the cycle is
/// half the counter. Numbering therefore restarts at 0 regardless of the
/// instrument's own labels.
pub(crate) fn reconstruct_cycles(rows: &[RawRow]) -> Vec<u32> {
    let mut extrema: BTreeMap<i64, (f64, f64)> = BTreeMap::new();
    for row in rows {
        let entry = extrema
            .entry(row.raw_cycle)
            .or_insert((f64::NEG_INFINITY, f64::INFINITY));
        entry.0 = entry.0.max(row.potential);
        entry.1 = entry.1.min(row.potential);
    }

    let mut counter: u32 = 0;
    rows.iter()
        .map(|row| {
            if let Some(&(max, min)) = extrema.get(&row.raw_cycle) {
                if row.potential == max || row.potential == min {
                    counter += 1;
                }
            }
            counter / 2
        })
        .collect()
}

/// Label each sample by comparing its potential with the previous sample of
/// the same cycle. The first sample of a cycle is oxidation.
pub(crate) fn label_redox(samples: &mut [Sample]) {
    let mut previous: Option<(u32, f64)> = None;
    for sample in samples.iter_mut() {
        sample.redox = match previous {
            Some((cycle, potential)) if cycle == sample.cycle && sample.potential < potential => {
                Redox::Reduction
            }
            _ => Redox::Oxidation,
        };
        previous = Some((sample.cycle, sample.potential));
    }
}

/// Drop samples whose raw row is within `window` rows of the earliest retained row
pub(crate) fn apply_skip_window(samples: &mut Vec<Sample>, window: usize) {
    let Some(first_row) = samples.iter().map(|s| s.source_row).min() else {
        return;
    };
    let limit = first_row.saturating_add(window);
    let before = samples.len();
    samples.retain(|s| s.source_row > limit);
    debug!("Skip window removed {} samples", before - samples.len());
}

/// Reorder each cycle into its first-label run followed by a run of the
/// other label, repeating the turning-point sample so both runs share it.
///
/// Every cycle that carries both labels is split, whatever its last label,
/// so a cycle never switches direction more than once.
pub(crate) fn duplicate_endpoints(samples: Vec<Sample>) -> Vec<Sample> {
    let mut output = Vec::with_capacity(samples.len() + samples.len() / 16 + 1);

    let mut start = 0;
    while start < samples.len() {
        let cycle = samples[start].cycle;
        let mut end = start;
        while end < samples.len() && samples[end].cycle == cycle {
            end += 1;
        }
        let group = &samples[start..end];
        start = end;

        let first_redox = group[0].redox;
        let second_redox = first_redox.opposite();
        if group.iter().all(|s| s.redox == first_redox) {
            output.extend_from_slice(group);
            continue;
        }

        let mut turning_point = None;
        for sample in group.iter().filter(|s| s.redox == first_redox) {
            output.push(*sample);
            turning_point = Some(*sample);
        }
        if let Some(mut duplicate) = turning_point {
            duplicate.redox = second_redox;
            output.push(duplicate);
        }
        output.extend(group.iter().filter(|s| s.redox == second_redox).copied());
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw_cycle: i64, potentials: &[f64]) -> Vec<RawRow> {
        potentials
            .iter()
            .enumerate()
            .map(|(i, &potential)| RawRow {
                potential,
                current: 0.0,
                raw_cycle,
                time: i as f64,
                source_row: i,
            })
            .collect()
    }

    fn sample(cycle: u32, potential: f64, source_row: usize) -> Sample {
        Sample {
            potential,
            current: 0.0,
            time: source_row as f64,
            cycle,
            redox: Redox::Oxidation,
            source_row,
        }
    }

    #[test]
    fn test_reconstruct_counts_extrema() {
        // max at index 2, min at index 5
        let rows = rows(2, &[0.0, 0.2, 0.4, 0.2, 0.0, -0.2, 0.0]);
        assert_eq!(reconstruct_cycles(&rows), vec![0, 0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_reconstruct_counter_spans_raw_cycles() {
        let mut all = rows(2, &[0.0, 0.5, -0.5]);
        all.extend(rows(3, &[0.0, 0.5, -0.5]));
        assert_eq!(reconstruct_cycles(&all), vec![0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_reconstruct_flat_group_counts_once_per_row() {
        let rows = rows(2, &[0.1, 0.1, 0.1]);
        assert_eq!(reconstruct_cycles(&rows), vec![0, 1, 1]);
    }

    #[test]
    fn test_label_redox() {
        let mut samples = vec![
            sample(0, 0.0, 0),
            sample(0, 0.1, 1),
            sample(0, 0.05, 2),
            sample(0, 0.05, 3),
            sample(1, -0.1, 4),
            sample(1, -0.2, 5),
        ];
        label_redox(&mut samples);
        let labels: Vec<Redox> = samples.iter().map(|s| s.redox).collect();
        assert_eq!(
            labels,
            vec![
                Redox::Oxidation,
                Redox::Oxidation,
                Redox::Reduction,
                Redox::Oxidation,
                Redox::Oxidation,
                Redox::Reduction,
            ]
        );
    }

    #[test]
    fn test_skip_window_relative_to_first_row() {
        let mut samples: Vec<Sample> = (10..20).map(|i| sample(0, 0.0, i)).collect();
        apply_skip_window(&mut samples, 5);
        assert_eq!(samples.first().map(|s| s.source_row), Some(16));
        assert_eq!(samples.len(), 4);

        let mut empty = Vec::new();
        apply_skip_window(&mut empty, 5);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_duplicate_endpoints() {
        let mut samples = vec![
            sample(1, 0.0, 0),
            sample(1, 0.1, 1),
            sample(1, 0.2, 2),
            sample(1, 0.1, 3),
            sample(1, 0.0, 4),
        ];
        label_redox(&mut samples);
        let out = duplicate_endpoints(samples);

        assert_eq!(out.len(), 6);
        assert_eq!(out[2].source_row, 2);
        assert_eq!(out[2].redox, Redox::Oxidation);
        assert_eq!(out[3].source_row, 2);
        assert_eq!(out[3].redox, Redox::Reduction);
        assert_eq!(out[5].source_row, 4);
    }

    #[test]
    fn test_duplicate_endpoints_splits_cycle_ending_on_first_label() {
        // Noisy dip: oxidation, reduction, then oxidation again
        let mut samples = vec![
            sample(2, 0.0, 0),
            sample(2, 0.2, 1),
            sample(2, 0.1, 2),
            sample(2, 0.05, 3),
            sample(2, 0.3, 4),
            sample(2, 0.4, 5),
        ];
        label_redox(&mut samples);
        let out = duplicate_endpoints(samples);

        let labels: Vec<Redox> = out.iter().map(|s| s.redox).collect();
        let switches = labels.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(switches, 1);
        assert_eq!(out.len(), 7);

        let rows: Vec<usize> = out.iter().map(|s| s.source_row).collect();
        assert_eq!(rows, vec![0, 1, 4, 5, 5, 2, 3]);
        assert_eq!(out[4].redox, Redox::Reduction);
    }

    #[test]
    fn test_single_label_cycle_unchanged() {
        let mut samples = vec![sample(3, 0.0, 0), sample(3, 0.1, 1), sample(3, 0.2, 2)];
        label_redox(&mut samples);
        let out = duplicate_endpoints(samples.clone());
        assert_eq!(out, samples);
    }

    #[test]
    fn test_wrangle_rejects_everything_filtered() {
        let table = RawTable::new(vec![0.0, 0.1], vec![1.0, 1.0], vec![1, 1], vec![0.0, 1.0]).unwrap();
        let result = wrangle(&table, &WrangleConfig::default());
        assert!(matches!(result, Err(VoltammetryError::InsufficientData(_))));
    }

    #[test]
    fn test_wrangle_drops_non_finite_rows() {
        let potential = vec![0.0, 0.1, f64::NAN, 0.3, 0.2, 0.1, 0.0, -0.1, 0.0, 0.1];
        let n = potential.len();
        let table = RawTable::new(
            potential,
            vec![1e-3; n],
            vec![2; n],
            (0..n).map(|i| i as f64).collect(),
        )
        .unwrap();
        let samples = wrangle(&table, &WrangleConfig::default().with_skip_window(0)).unwrap();
        assert!(samples.iter().all(|s| s.source_row != 2));
        assert!(samples.iter().all(|s| s.potential.is_finite()));
    }
}
