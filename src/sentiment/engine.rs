//! Filters a dataset by selection and computes the headline metrics.

use serde::Serialize;

use crate::dataset::{Dataset, Record};

use super::label::Label;
use super::selection::Selection;

/// Records that passed a selection, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }
}

/// Headline numbers for a filtered view.
///
/// `score` and `modal_label` are `None` when the view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub count: usize,
    pub score: Option<f64>,
    pub modal_label: Option<Label>,
}

impl Metrics {
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Occurrences of each label, indexed in code order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts([usize; 4]);

impl LabelCounts {
    pub fn get(&self, label: Label) -> usize {
        self.0[label.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(label, count)` pairs in code order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        Label::ALL.into_iter().map(|label| (label, self.get(label)))
    }

    /// Most frequent label. Ties go to the lowest code; `None` when empty.
    pub fn mode(&self) -> Option<Label> {
        let mut best: Option<(Label, usize)> = None;
        for (label, count) in self.iter() {
            if count == 0 {
                continue;
            }
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }
}

/// Count labels across `records`.
pub fn label_counts<'a, I>(records: I) -> LabelCounts
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = LabelCounts::default();
    for record in records {
        counts.0[record.label.index()] += 1;
    }
    counts
}

/// Keep the records whose label the selection admits.
pub fn filter<'a>(dataset: &'a Dataset, selection: &Selection) -> FilteredView<'a> {
    FilteredView {
        records: dataset
            .iter()
            .filter(|record| selection.admits(record.label))
            .collect(),
    }
}

/// Compute count, normalized score and modal label for a view.
pub fn metrics(view: &FilteredView<'_>) -> Metrics {
    let count = view.len();
    if count == 0 {
        return Metrics {
            count,
            score: None,
            modal_label: None,
        };
    }
    let points: u64 = view.iter().map(|record| u64::from(record.label.points())).sum();
    let max_points = count as f64 * 2.0;
    Metrics {
        count,
        score: Some(round2(points as f64 / max_points)),
        modal_label: label_counts(view.iter()).mode(),
    }
}

/// Filter `dataset` by `selection` and score the result.
pub fn filter_and_score<'a>(
    dataset: &'a Dataset,
    selection: &Selection,
) -> (FilteredView<'a>, Metrics) {
    let view = filter(dataset, selection);
    let metrics = metrics(&view);
    if !metrics.has_data() {
        tracing::debug!("Selection {:?} matched no records", selection);
    }
    (view, metrics)
}

/// Two-decimal rounding with ties to even, so 0.625 becomes 0.62.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
