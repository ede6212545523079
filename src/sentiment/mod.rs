//! Sentiment categories, selections and the filter/metrics engine.

mod engine;
mod label;
mod selection;

pub use engine::{FilteredView, LabelCounts, Metrics, filter, filter_and_score, label_counts, metrics};
pub use label::{Label, SentimentName, UnknownSentiment};
pub use selection::Selection;
