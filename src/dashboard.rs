//! One pass of the dashboard: selection in, metrics and chart series out.

use std::fmt::Write as _;

use serde::Serialize;

use crate::charts::{ChartData, Histogram};
use crate::config::DashboardSettings;
use crate::dataset::Dataset;
use crate::sentiment::{self, Metrics, Selection};

pub const TITLE: &str = "Análisis de Sentimiento de Comentarios";
const NO_DATA: &str = "sin datos";
const BAR_WIDTH: usize = 40;

/// Everything rendered for one selection. Rebuilt on every selection change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub metrics: Metrics,
    pub charts: ChartData,
}

impl DashboardView {
    pub fn build(dataset: &Dataset, selection: &Selection, settings: &DashboardSettings) -> Self {
        let (view, metrics) = sentiment::filter_and_score(dataset, selection);
        let charts = ChartData::build(
            dataset,
            &view,
            settings.histogram_max_bins,
            settings.density_steps,
        );
        tracing::info!(
            "Selection {:?}: {} comments, score {:?}, modal {:?}",
            selection.names().collect::<Vec<_>>(),
            metrics.count,
            metrics.score,
            metrics.modal_label
        );
        Self {
            selection: selection.clone(),
            metrics,
            charts,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text report for the terminal.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}");
        let _ = writeln!(out, "{}", "=".repeat(TITLE.chars().count()));
        let names: Vec<String> = self.selection.names().map(|n| n.to_string()).collect();
        let selection = if names.is_empty() {
            "todos".to_string()
        } else {
            names.join(", ")
        };
        let _ = writeln!(out, "Sentimientos: {selection}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Número de comentarios: {}", self.metrics.count);
        let score = self
            .metrics
            .score
            .map(|score| format!("{score:.2}"))
            .unwrap_or_else(|| NO_DATA.to_string());
        let _ = writeln!(out, "Score de sentimiento:  {score}");
        let modal = self
            .metrics
            .modal_label
            .map(|label| label.to_string())
            .unwrap_or_else(|| NO_DATA.to_string());
        let _ = writeln!(out, "Sentimiento Modal:     {modal}");

        let _ = writeln!(out);
        let _ = writeln!(out, "Distribución de Etiquetas");
        if self.charts.label_distribution.is_empty() {
            let _ = writeln!(out, "  ({NO_DATA})");
        }
        let top = self
            .charts
            .label_distribution
            .first()
            .map(|slice| slice.count)
            .unwrap_or(0);
        for slice in &self.charts.label_distribution {
            let _ = writeln!(
                out,
                "  {:<4} {:>7} {}",
                slice.label.code(),
                slice.count,
                bar(slice.count, top)
            );
        }

        render_histogram(
            &mut out,
            "Distribución de la longitud de los comentarios",
            &self.charts.length_histogram,
        );
        render_histogram(
            &mut out,
            "Distribución de comentarios según el número de palabras",
            &self.charts.word_count_histogram,
        );

        for distribution in &self.charts.distributions {
            let _ = writeln!(out);
            let _ = writeln!(out, "Boxplot de {} por sentimiento", distribution.feature.title());
            for series in &distribution.series {
                let s = &series.summary;
                let _ = writeln!(
                    out,
                    "  {:<4} min {:>6.1}  q1 {:>6.1}  mediana {:>6.1}  q3 {:>6.1}  max {:>6.1}  atípicos {}",
                    series.label.code(),
                    s.min,
                    s.q1,
                    s.median,
                    s.q3,
                    s.max,
                    s.outliers
                );
            }
        }
        out
    }
}

fn render_histogram(out: &mut String, title: &str, histogram: &Histogram) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    if histogram.bins.is_empty() {
        let _ = writeln!(out, "  ({NO_DATA})");
        return;
    }
    let top = histogram.bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    for bin in &histogram.bins {
        let _ = writeln!(
            out,
            "  {:>6}-{:<6} {:>7} {}",
            bin.start,
            bin.end,
            bin.count,
            bar(bin.count, top)
        );
    }
}

fn bar(count: usize, top: usize) -> String {
    if top == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(top);
    "#".repeat(width)
}
