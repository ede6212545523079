//! Sentiment corpus dashboard: loads a pre-labeled comment corpus, filters it
//! by sentiment and reports headline metrics plus chart-ready aggregates.

/// Application directory resolution.
pub mod app_dirs;
/// Chart-ready aggregates for the dashboard plots.
pub mod charts;
/// Dashboard settings stored as TOML.
pub mod config;
/// Corpus file loading.
pub mod corpus;
/// One dashboard pass and its text/JSON rendering.
pub mod dashboard;
/// Record assembly from corpus partitions.
pub mod dataset;
/// Top-level error type.
pub mod error;
/// Tracing subscriber setup.
pub mod logging;
/// Sentiment categories and the filter/metrics engine.
pub mod sentiment;

pub use dashboard::DashboardView;
pub use dataset::{Dataset, Record, load_dataset};
pub use error::DashboardError;
pub use sentiment::{FilteredView, Label, Metrics, Selection, SentimentName, filter_and_score};
