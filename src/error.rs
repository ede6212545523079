use thiserror::Error;

use crate::config::ConfigError;
use crate::corpus::CorpusError;
use crate::dataset::DatasetError;
use crate::sentiment::UnknownSentiment;

/// Top-level failures that stop a dashboard run.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Selection(#[from] UnknownSentiment),
    #[error("Failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),
}
