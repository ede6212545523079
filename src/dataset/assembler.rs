//! Joins text and label lines into records and derives per-record features.

use serde::Serialize;
use thiserror::Error;

use crate::corpus::{self, CorpusPaths, FallbackEncoding, RawCorpus};
use crate::error::DashboardError;
use crate::sentiment::Label;

/// Corpus partition a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Split::Train => "train",
            Split::Test => "test",
        })
    }
}

/// Data-integrity failures detected while pairing text with labels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// A partition's text and label files have different line counts.
    #[error("{split} partition has {texts} text lines but {labels} label lines")]
    MisalignedLengths {
        split: Split,
        texts: usize,
        labels: usize,
    },
    /// A label line holds something other than `pos`, `neg`, `neu` or `q`.
    #[error("{split} label line {line} has unknown code '{value}'")]
    UnknownLabel {
        split: Split,
        /// 1-based line number in the label file.
        line: usize,
        value: String,
    },
}

/// One comment with its label and derived features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub text: String,
    pub label: Label,
    pub split: Split,
    /// Character count of `text`.
    pub length: usize,
    /// Whitespace-delimited token count of `text`.
    pub word_count: usize,
}

impl Record {
    pub fn new(text: String, label: Label, split: Split) -> Self {
        let length = text.chars().count();
        let word_count = text.split_whitespace().count();
        Self {
            text,
            label,
            split,
            length,
            word_count,
        }
    }
}

/// Immutable, ordered record sequence: train records first, then test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Assemble from freshly loaded corpus files.
    pub fn from_raw(raw: RawCorpus) -> Result<Self, DatasetError> {
        assemble(raw.train_text, raw.train_labels, raw.test_text, raw.test_labels)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that came from `split`.
    pub fn split_len(&self, split: Split) -> usize {
        self.records.iter().filter(|r| r.split == split).count()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Zip each partition's text with its labels by position and concatenate
/// train followed by test.
pub fn assemble(
    train_text: Vec<String>,
    train_labels: Vec<String>,
    test_text: Vec<String>,
    test_labels: Vec<String>,
) -> Result<Dataset, DatasetError> {
    let mut records = Vec::with_capacity(train_text.len() + test_text.len());
    zip_partition(Split::Train, train_text, train_labels, &mut records)?;
    zip_partition(Split::Test, test_text, test_labels, &mut records)?;
    Ok(Dataset { records })
}

fn zip_partition(
    split: Split,
    texts: Vec<String>,
    labels: Vec<String>,
    out: &mut Vec<Record>,
) -> Result<(), DatasetError> {
    if texts.len() != labels.len() {
        return Err(DatasetError::MisalignedLengths {
            split,
            texts: texts.len(),
            labels: labels.len(),
        });
    }
    for (idx, (text, code)) in texts.into_iter().zip(labels).enumerate() {
        let label = Label::from_code(&code).ok_or_else(|| DatasetError::UnknownLabel {
            split,
            line: idx + 1,
            value: code.clone(),
        })?;
        out.push(Record::new(text, label, split));
    }
    Ok(())
}

/// Load the four corpus files and assemble them into a dataset.
pub fn load_dataset(
    paths: &CorpusPaths,
    fallback: FallbackEncoding,
) -> Result<Dataset, DashboardError> {
    let raw = corpus::load_corpus(paths, fallback)?;
    let dataset = Dataset::from_raw(raw)?;
    tracing::info!(
        "Loaded {} records ({} train, {} test)",
        dataset.len(),
        dataset.split_len(Split::Train),
        dataset.split_len(Split::Test)
    );
    Ok(dataset)
}
