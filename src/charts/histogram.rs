use serde::Serialize;

/// One histogram bin covering `[start, end)`. The last bin also includes `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram with a "nice" step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub step: f64,
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Bin integer feature values into at most `max_bins` bins.
///
/// The step is the smallest of `{1, 2, 5} x 10^k` (and never below 1) that
/// covers the value range within `max_bins`; bin edges sit on multiples of
/// the step.
pub fn histogram<I>(values: I, max_bins: usize) -> Histogram
where
    I: IntoIterator<Item = usize>,
{
    let values: Vec<usize> = values.into_iter().collect();
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Histogram::default();
    };
    let max_bins = max_bins.max(1);
    let mut step = nice_step((max - min) as f64, max_bins);
    // Flooring `start` below `min` can add a bin; widen the step until it fits.
    let (start, bin_count) = loop {
        let (start, bin_count) = layout(min, max, step);
        if bin_count <= max_bins {
            break (start, bin_count);
        }
        step = next_nice_step(step);
    };
    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|idx| Bin {
            start: start + idx as f64 * step,
            end: start + (idx + 1) as f64 * step,
            count: 0,
        })
        .collect();
    for value in values {
        let idx = (((value as f64) - start) / step).floor() as usize;
        bins[idx.min(bin_count - 1)].count += 1;
    }
    Histogram { step, bins }
}

/// First edge and bin count for `step`.
fn layout(min: usize, max: usize, step: f64) -> (f64, usize) {
    let start = (min as f64 / step).floor() * step;
    let mut bin_count = (((max as f64) - start) / step).floor() as usize + 1;
    // A max sitting exactly on the last edge folds into the previous bin.
    if bin_count > 1 && start + (bin_count - 1) as f64 * step == max as f64 && max > min {
        bin_count -= 1;
    }
    (start, bin_count)
}

fn next_nice_step(step: f64) -> f64 {
    let magnitude = 10f64.powf(step.log10().floor());
    let factor = (step / magnitude).round();
    if factor < 2.0 {
        2.0 * magnitude
    } else if factor < 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

fn nice_step(span: f64, max_bins: usize) -> f64 {
    let raw = span / max_bins as f64;
    if raw <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|factor| factor * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_bins() {
        let hist = histogram(Vec::new(), 30);
        assert!(hist.bins.is_empty());
        assert_eq!(hist.total(), 0);
    }

    #[test]
    fn single_value_gets_one_bin() {
        let hist = histogram([7, 7, 7], 30);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
        assert!(hist.bins[0].start <= 7.0 && 7.0 < hist.bins[0].end);
    }

    #[test]
    fn small_range_uses_unit_step() {
        let hist = histogram([1, 2, 2, 3, 5], 30);
        assert_eq!(hist.step, 1.0);
        assert_eq!(hist.bins.first().unwrap().start, 1.0);
        assert_eq!(hist.bins.len(), 4);
        let counts: Vec<usize> = hist.bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 2, 1, 1]);
    }

    #[test]
    fn wide_range_respects_max_bins() {
        let values: Vec<usize> = (0..=1_000).collect();
        let hist = histogram(values.clone(), 30);
        assert_eq!(hist.step, 50.0);
        assert!(hist.bins.len() <= 30);
        assert_eq!(hist.total(), values.len());
        assert_eq!(hist.bins.last().unwrap().count, 51);
    }

    #[test]
    fn offset_minimum_still_respects_max_bins() {
        let values: Vec<usize> = (7..=157).collect();
        let hist = histogram(values.clone(), 30);
        assert!(hist.bins.len() <= 30, "{} bins", hist.bins.len());
        assert_eq!(hist.step, 10.0);
        assert_eq!(hist.bins.first().unwrap().start, 0.0);
        assert_eq!(hist.total(), values.len());
    }

    #[test]
    fn bin_cap_holds_across_offsets() {
        for min in 0..60usize {
            for max_bins in [1, 3, 7, 30] {
                let values: Vec<usize> = (min..=min + 150).collect();
                let hist = histogram(values.clone(), max_bins);
                assert!(hist.bins.len() <= max_bins, "min {min} max_bins {max_bins}");
                assert_eq!(hist.total(), values.len());
            }
        }
    }

    #[test]
    fn next_step_walks_one_two_five() {
        assert_eq!(next_nice_step(1.0), 2.0);
        assert_eq!(next_nice_step(2.0), 5.0);
        assert_eq!(next_nice_step(5.0), 10.0);
        assert_eq!(next_nice_step(10.0), 20.0);
        assert_eq!(next_nice_step(50.0), 100.0);
    }

    #[test]
    fn every_value_falls_inside_some_bin() {
        let values = vec![3, 17, 42, 99, 140, 141, 263];
        let hist = histogram(values.clone(), 10);
        assert!(hist.bins.len() <= 10);
        assert_eq!(hist.total(), values.len());
        for value in values {
            let v = value as f64;
            assert!(
                hist.bins.iter().any(|b| b.start <= v && v <= b.end),
                "{value} not covered"
            );
        }
    }

    #[test]
    fn nice_steps_are_one_two_or_five() {
        assert_eq!(nice_step(12.0, 30), 1.0);
        assert_eq!(nice_step(45.0, 30), 2.0);
        assert_eq!(nice_step(140.0, 30), 5.0);
        assert_eq!(nice_step(250.0, 30), 10.0);
        assert_eq!(nice_step(1_000.0, 30), 50.0);
    }
}
