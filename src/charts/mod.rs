//! Chart-ready aggregates behind the dashboard's plots.
//!
//! Nothing here draws anything. Each function reduces records to the series a
//! renderer needs: the label donut, feature histograms for the filtered view,
//! and per-label box and density series over the whole dataset.

mod distribution;
mod histogram;

pub use distribution::{BoxSummary, DensityPoint, bandwidth, box_summary, density};
pub use histogram::{Bin, Histogram, histogram};

use serde::Serialize;

use crate::dataset::{Dataset, Record};
use crate::sentiment::{self, FilteredView, Label};

/// Numeric per-record feature that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Length,
    WordCount,
}

impl Feature {
    pub const ALL: [Feature; 2] = [Feature::Length, Feature::WordCount];

    pub fn value(self, record: &Record) -> usize {
        match self {
            Feature::Length => record.length,
            Feature::WordCount => record.word_count,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Feature::Length => "Longitud del Comentario (caracteres)",
            Feature::WordCount => "Número de palabras",
        }
    }
}

/// Slice of the label donut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: Label,
    pub count: usize,
}

/// Box and density series for one label and feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSeries {
    pub label: Label,
    pub summary: BoxSummary,
    pub density: Vec<DensityPoint>,
}

/// Per-label distributions of one feature across the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDistribution {
    pub feature: Feature,
    pub series: Vec<LabelSeries>,
}

/// Everything the dashboard plots for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub label_distribution: Vec<LabelCount>,
    pub length_histogram: Histogram,
    pub word_count_histogram: Histogram,
    pub distributions: Vec<FeatureDistribution>,
}

impl ChartData {
    /// Build every series for `view`; distributions use all of `dataset`.
    pub fn build(
        dataset: &Dataset,
        view: &FilteredView<'_>,
        max_bins: usize,
        density_steps: usize,
    ) -> Self {
        Self {
            label_distribution: label_distribution(view.iter()),
            length_histogram: feature_histogram(view, Feature::Length, max_bins),
            word_count_histogram: feature_histogram(view, Feature::WordCount, max_bins),
            distributions: Feature::ALL
                .into_iter()
                .map(|feature| feature_distribution(dataset, feature, density_steps))
                .collect(),
        }
    }
}

/// Label counts by descending frequency, ties in code order. Zero counts are dropped.
pub fn label_distribution<'a, I>(records: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: Vec<LabelCount> = sentiment::label_counts(records)
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));
    counts
}

/// Histogram of `feature` over the filtered view.
pub fn feature_histogram(view: &FilteredView<'_>, feature: Feature, max_bins: usize) -> Histogram {
    histogram(view.iter().map(|record| feature.value(record)), max_bins)
}

/// Box and density series per label, evaluated over the feature's full extent.
pub fn feature_distribution(
    dataset: &Dataset,
    feature: Feature,
    density_steps: usize,
) -> FeatureDistribution {
    let values = |label: Option<Label>| -> Vec<f64> {
        dataset
            .iter()
            .filter(|record| label.is_none_or(|l| record.label == l))
            .map(|record| feature.value(record) as f64)
            .collect()
    };
    let all = values(None);
    let lo = all.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let series = Label::ALL
        .into_iter()
        .filter_map(|label| {
            let label_values = values(Some(label));
            let summary = box_summary(&label_values)?;
            Some(LabelSeries {
                label,
                summary,
                density: density(&label_values, lo, hi, density_steps),
            })
        })
        .collect();
    FeatureDistribution { feature, series }
}
