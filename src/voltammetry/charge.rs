use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::integrate::{integrate_run, integrate_segment, IntegrationTrace};
use super::sample::{ChargeKind, Redox, Sample, Valence};

/// Charge passed during one redox segment of one cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeEntry {
    /// Reconstructed cycle
    pub cycle: u32,
    /// Segment direction
    pub redox: Redox,
    /// |∫ positive current dt| (C)
    pub anodic_charge: f64,
    /// |∫ negative current dt| (C)
    pub cathodic_charge: f64,
    /// anodic + cathodic (C)
    pub total_charge: f64,
}

/// Mean charge per redox direction over the integrated cycles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AveragedCharge {
    /// Segment direction
    pub redox: Redox,
    /// Mean anodic charge (C)
    pub anodic_charge: f64,
    /// Standard error of the mean anodic charge (C)
    pub anodic_charge_err: f64,
    /// Mean cathodic charge (C)
    pub cathodic_charge: f64,
    /// Standard error of the mean cathodic charge (C)
    pub cathodic_charge_err: f64,
    /// Sum of the two means (C)
    pub total_charge: f64,
    /// Number of segments averaged
    pub cycles: u32,
}

/// Result of [`get_charge_passed`](super::CyclicVoltammogram::get_charge_passed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum ChargeReport {
    /// One row per (cycle, redox)
    PerCycle(Vec<ChargeEntry>),
    /// One row per redox direction
    Averaged(Vec<AveragedCharge>),
}

impl ChargeReport {
    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            Self::PerCycle(rows) => rows.len(),
            Self::Averaged(rows) => rows.len(),
        }
    }

    /// True if the report has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ChargeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerCycle(rows) => {
                writeln!(f, "{:>5}  {:<9}  {:>14}  {:>14}  {:>14}", "cycle", "redox", "anodic (C)", "cathodic (C)", "total (C)")?;
                for row in rows {
                    writeln!(
                        f,
                        "{:>5}  {:<9}  {:>14.6e}  {:>14.6e}  {:>14.6e}",
                        row.cycle, row.redox, row.anodic_charge, row.cathodic_charge, row.total_charge
                    )?;
                }
            }
            Self::Averaged(rows) => {
                writeln!(f, "{:<9}  {:>24}  {:>24}  {:>6}", "redox", "anodic (C)", "cathodic (C)", "cycles")?;
                for row in rows {
                    writeln!(
                        f,
                        "{:<9}  {:>11.4e} ± {:<10.2e}  {:>11.4e} ± {:<10.2e}  {:>6}",
                        row.redox,
                        row.anodic_charge,
                        row.anodic_charge_err,
                        row.cathodic_charge,
                        row.cathodic_charge_err,
                        row.cycles
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// A maximal run of same-sign current, integrated between its zero crossings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxChargeSection {
    /// Zero-based position of the run in scan order
    pub section: usize,
    /// Sign of the run's current
    #[serde(rename = "type")]
    pub kind: ChargeKind,
    /// Start of the integrated interval (s)
    pub t_min: f64,
    /// End of the integrated interval (s)
    pub t_max: f64,
    /// Absolute charge (C)
    pub total_charge: f64,
}

/// Samples of one (cycle, redox) segment, in table order
pub(crate) fn segment_samples(samples: &[Sample], cycle: u32, redox: Redox) -> Vec<Sample> {
    samples
        .iter()
        .filter(|s| s.cycle == cycle && s.redox == redox)
        .copied()
        .collect()
}

/// Integrate every interior segment.
///
/// Cycle 0 and the highest cycle id are partial sweeps and are skipped.
pub(crate) fn charges_passed(samples: &[Sample]) -> Vec<ChargeEntry> {
    let Some(max_cycle) = samples.iter().map(|s| s.cycle).max() else {
        return Vec::new();
    };

    let mut segments: BTreeMap<(u32, Redox), Vec<Sample>> = BTreeMap::new();
    for sample in samples
        .iter()
        .filter(|s| s.cycle != 0 && s.cycle != max_cycle)
    {
        segments
            .entry((sample.cycle, sample.redox))
            .or_default()
            .push(*sample);
    }

    segments
        .into_iter()
        .map(|((cycle, redox), segment)| {
            let anodic = integrate_segment(&segment, redox, Valence::Positive).charge;
            let cathodic = integrate_segment(&segment, redox, Valence::Negative).charge;
            ChargeEntry {
                cycle,
                redox,
                anodic_charge: anodic,
                cathodic_charge: cathodic,
                total_charge: anodic + cathodic,
            }
        })
        .collect()
}

/// Mean and standard error of the mean; the error is 0 below two values
fn mean_and_sem(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    if n < 2 {
        return (mean, 0.0);
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, variance.sqrt() / (n as f64).sqrt())
}

/// Average per-cycle charges by redox direction
pub(crate) fn average_charges(entries: &[ChargeEntry]) -> Vec<AveragedCharge> {
    [Redox::Oxidation, Redox::Reduction]
        .into_iter()
        .filter_map(|redox| {
            let group: Vec<&ChargeEntry> = entries.iter().filter(|e| e.redox == redox).collect();
            if group.is_empty() {
                return None;
            }
            let anodic: Vec<f64> = group.iter().map(|e| e.anodic_charge).collect();
            let cathodic: Vec<f64> = group.iter().map(|e| e.cathodic_charge).collect();
            let (anodic_mean, anodic_err) = mean_and_sem(&anodic);
            let (cathodic_mean, cathodic_err) = mean_and_sem(&cathodic);
            Some(AveragedCharge {
                redox,
                anodic_charge: anodic_mean,
                anodic_charge_err: anodic_err,
                cathodic_charge: cathodic_mean,
                cathodic_charge_err: cathodic_err,
                total_charge: anodic_mean + cathodic_mean,
                cycles: group.len() as u32,
            })
        })
        .collect()
}

/// Split the scan into maximal same-sign current runs and integrate each.
///
/// Turning-point duplicates are removed first so every raw row is counted
/// once; zero-current samples separate runs.
pub(crate) fn maximum_charge_sections(
    samples: &[Sample],
) -> Vec<(MaxChargeSection, IntegrationTrace)> {
    let mut seen = HashSet::new();
    let unique: Vec<Sample> = samples
        .iter()
        .filter(|s| seen.insert(s.source_row))
        .copied()
        .collect();

    let mut sections = Vec::new();
    let mut start = 0;
    while start < unique.len() {
        let kind = match sign_of(unique[start].current) {
            Some(kind) => kind,
            None => {
                start += 1;
                continue;
            }
        };
        let mut end = start;
        while end + 1 < unique.len() && sign_of(unique[end + 1].current) == Some(kind) {
            end += 1;
        }

        let trace = integrate_run(&unique, start, end);
        let section = MaxChargeSection {
            section: sections.len(),
            kind,
            t_min: trace.time.first().copied().unwrap_or(unique[start].time),
            t_max: trace.time.last().copied().unwrap_or(unique[end].time),
            total_charge: trace.charge,
        };
        sections.push((section, trace));
        start = end + 1;
    }
    sections
}

fn sign_of(current: f64) -> Option<ChargeKind> {
    if current > 0.0 {
        Some(ChargeKind::Anodic)
    } else if current < 0.0 {
        Some(ChargeKind::Cathodic)
    } else {
        None
    }
}
