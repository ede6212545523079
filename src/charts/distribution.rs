//! Per-label summaries of a numeric feature: box-plot statistics and kernel
//! density curves.

use serde::Serialize;

/// Five-number summary with 1.5 IQR whiskers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value not below `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value not above `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    pub outliers: usize,
}

/// One evaluated point of a density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityPoint {
    pub value: f64,
    pub density: f64,
}

/// Summarize `values`. Returns `None` for an empty slice.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let sorted = sorted(values);
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let fence = 1.5 * (q3 - q1);
    let (low_fence, high_fence) = (q1 - fence, q3 + fence);
    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|v| *v >= low_fence)
        .unwrap_or(min);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= high_fence)
        .unwrap_or(max);
    let outliers = sorted
        .iter()
        .filter(|v| **v < low_fence || **v > high_fence)
        .count();
    Some(BoxSummary {
        min,
        q1,
        median,
        q3,
        max,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// Gaussian kernel density of `values`, evaluated at `steps` evenly spaced
/// points across `[lo, hi]`.
///
/// Empty input yields an empty curve.
pub fn density(values: &[f64], lo: f64, hi: f64, steps: usize) -> Vec<DensityPoint> {
    if values.is_empty() {
        return Vec::new();
    }
    let bandwidth = bandwidth(values);
    let n = values.len() as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let steps = steps.max(2);
    let stride = (hi - lo) / (steps - 1) as f64;
    (0..steps)
        .map(|idx| {
            let x = lo + idx as f64 * stride;
            let sum: f64 = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            DensityPoint {
                value: x,
                density: sum * norm,
            }
        })
        .collect()
}

/// Scott-style bandwidth `1.06 * min(sd, IQR / 1.34) * n^(-1/5)`.
///
/// Falls back to the standard deviation, then to 1.0, when the estimate
/// collapses to zero (e.g. many repeated values).
pub fn bandwidth(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n < 2.0 {
        return 1.0;
    }
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let sd = variance.sqrt();
    let sorted = sorted(values);
    let iqr = quantile(&sorted, 0.75) - quantile(&sorted, 0.25);
    let spread = if iqr > 0.0 { sd.min(iqr / 1.34) } else { sd };
    let estimate = 1.06 * spread * n.powf(-0.2);
    if estimate > 0.0 {
        estimate
    } else if sd > 0.0 {
        sd
    } else {
        1.0
    }
}

/// Linear-interpolated quantile of an ascending slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let pos = p * (len - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let frac = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * frac
        }
    }
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
