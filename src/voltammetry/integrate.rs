//! Charge integration over irregularly spaced samples.

use log::warn;
use serde::{Deserialize, Serialize};

use super::sample::{Redox, Sample, Valence};

/// The arrays actually integrated for one charge value.
///
/// `time` and `current` include any synthesized zero-crossing endpoints, so a
/// plot of them shows exactly the area behind `charge`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntegrationTrace {
    /// Sample times (s), with synthesized endpoints
    pub time: Vec<f64>,
    /// Currents (A), with synthesized endpoints at 0
    pub current: Vec<f64>,
    /// Absolute integrated charge (C)
    pub charge: f64,
}

impl IntegrationTrace {
    fn from_points(time: Vec<f64>, current: Vec<f64>) -> Self {
        let charge = simpson(&current, &time).abs();
        Self {
            time,
            current,
            charge,
        }
    }
}

/// Composite Simpson's rule for samples `y` at irregular abscissae `x`.
///
/// An odd point count integrates pairs of intervals with the non-uniform
/// three-point rule. An even count does the same over the first `n - 1`
/// points and adds Cartwright's correction for the final interval. Two
/// points fall back to the trapezoid rule, fewer give 0.
///
/// # Example
///
/// ```
/// use echem_analytics::voltammetry::simpson;
///
/// let x = [0.0, 1.0, 2.0];
/// let y = [0.0, 1.0, 4.0];
/// assert!((simpson(&y, &x) - 8.0 / 3.0).abs() < 1e-12);
/// ```
pub fn simpson(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }
    if n == 2 {
        return 0.5 * (x[1] - x[0]) * (y[0] + y[1]);
    }
    if n % 2 == 1 {
        return simpson_pairs(y, x, n - 2);
    }

    let mut result = simpson_pairs(y, x, n - 3);
    let h0 = x[n - 2] - x[n - 3];
    let h1 = x[n - 1] - x[n - 2];
    let alpha = (2.0 * h1 * h1 + 3.0 * h0 * h1) / (6.0 * (h1 + h0));
    let beta = (h1 * h1 + 3.0 * h0 * h1) / (6.0 * h0);
    let eta = (h1 * h1 * h1) / (6.0 * h0 * (h0 + h1));
    result += alpha * y[n - 1] + beta * y[n - 2] - eta * y[n - 3];
    result
}

fn simpson_pairs(y: &[f64], x: &[f64], stop: usize) -> f64 {
    (0..stop)
        .step_by(2)
        .map(|i| {
            let h0 = x[i + 1] - x[i];
            let h1 = x[i + 2] - x[i + 1];
            let hsum = h0 + h1;
            let hprod = h0 * h1;
            let ratio = h0 / h1;
            hsum / 6.0
                * (y[i] * (2.0 - 1.0 / ratio)
                    + y[i + 1] * (hsum * hsum / hprod)
                    + y[i + 2] * (2.0 - ratio))
        })
        .sum()
}

/// Time at which the line through (x1, y1) and (x2, y2) crosses zero current
pub fn zero_crossing(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    x1 - y1 * (x2 - x1) / (y2 - y1)
}

/// Integrate the `valence` part of one redox segment.
///
/// The segment's samples of the requested sign are closed with one
/// interpolated zero crossing: after the last of them for (oxidation,
/// negative) and (reduction, positive), before the first of them otherwise.
/// The crossing is taken against the neighbouring segment sample; without a
/// neighbour no point is added.
pub(crate) fn integrate_segment(
    segment: &[Sample],
    redox: Redox,
    valence: Valence,
) -> IntegrationTrace {
    let indices: Vec<usize> = segment
        .iter()
        .enumerate()
        .filter(|(_, s)| valence.contains(s.current))
        .map(|(i, _)| i)
        .collect();
    let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
        return IntegrationTrace::default();
    };

    let mut time: Vec<f64> = indices.iter().map(|&i| segment[i].time).collect();
    let mut current: Vec<f64> = indices.iter().map(|&i| segment[i].current).collect();

    let append = matches!(
        (redox, valence),
        (Redox::Oxidation, Valence::Negative) | (Redox::Reduction, Valence::Positive)
    );
    if append {
        match segment.get(last + 1) {
            Some(next) => {
                time.push(zero_crossing(
                    segment[last].time,
                    next.time,
                    segment[last].current,
                    next.current,
                ));
                current.push(0.0);
            }
            None => warn!(
                "No sample after the {} {} run of cycle {}; integrating unclosed",
                redox, valence, segment[last].cycle
            ),
        }
    } else if first > 0 {
        let previous = &segment[first - 1];
        time.insert(
            0,
            zero_crossing(
                segment[first].time,
                previous.time,
                segment[first].current,
                previous.current,
            ),
        );
        current.insert(0, 0.0);
    } else {
        warn!(
            "No sample before the {} {} run of cycle {}; integrating unclosed",
            redox, valence, segment[first].cycle
        );
    }

    IntegrationTrace::from_points(time, current)
}

/// Integrate one maximal same-sign run `samples[start..=end]`, closing both
/// ends against the neighbouring samples when they exist
pub(crate) fn integrate_run(samples: &[Sample], start: usize, end: usize) -> IntegrationTrace {
    let run = &samples[start..=end];
    let mut time: Vec<f64> = run.iter().map(|s| s.time).collect();
    let mut current: Vec<f64> = run.iter().map(|s| s.current).collect();

    if start > 0 {
        let previous = &samples[start - 1];
        let root = zero_crossing(run[0].time, previous.time, run[0].current, previous.current);
        time.insert(0, root);
        current.insert(0, 0.0);
    }
    if let Some(next) = samples.get(end + 1) {
        let tail = &run[run.len() - 1];
        time.push(zero_crossing(tail.time, next.time, tail.current, next.current));
        current.push(0.0);
    }

    IntegrationTrace::from_points(time, current)
}
