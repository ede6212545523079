//! Closed sentiment category sets: internal label codes and user-facing names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Internal sentiment code attached to every corpus record.
///
/// Variant order matches the lexicographic order of the codes
/// (`neg < neu < pos < q`), so the derived `Ord` can break frequency ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Neg,
    Neu,
    Pos,
    Q,
}

impl Label {
    /// Every label, in code order.
    pub const ALL: [Label; 4] = [Label::Neg, Label::Neu, Label::Pos, Label::Q];

    /// Short code as it appears in label files.
    pub fn code(self) -> &'static str {
        match self {
            Label::Neg => "neg",
            Label::Neu => "neu",
            Label::Pos => "pos",
            Label::Q => "q",
        }
    }

    /// Parse a label file code. Returns `None` for anything outside the four codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "neg" => Some(Label::Neg),
            "neu" => Some(Label::Neu),
            "pos" => Some(Label::Pos),
            "q" => Some(Label::Q),
            _ => None,
        }
    }

    /// Score contribution: positive 2, neutral 1, negative and questions 0.
    pub fn points(self) -> u32 {
        match self {
            Label::Pos => 2,
            Label::Neu => 1,
            Label::Neg | Label::Q => 0,
        }
    }

    /// User-facing name for this label.
    pub fn sentiment(self) -> SentimentName {
        match self {
            Label::Pos => SentimentName::Positivo,
            Label::Neg => SentimentName::Negativo,
            Label::Neu => SentimentName::Neutral,
            Label::Q => SentimentName::Pregunta,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Sentiment category as offered in the selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentName {
    Positivo,
    Negativo,
    Neutral,
    Pregunta,
}

impl SentimentName {
    /// Every name, in the order the selection control lists them.
    pub const ALL: [SentimentName; 4] = [
        SentimentName::Positivo,
        SentimentName::Negativo,
        SentimentName::Neutral,
        SentimentName::Pregunta,
    ];

    /// Internal code this name filters on.
    pub fn label(self) -> Label {
        match self {
            SentimentName::Positivo => Label::Pos,
            SentimentName::Negativo => Label::Neg,
            SentimentName::Neutral => Label::Neu,
            SentimentName::Pregunta => Label::Q,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentName::Positivo => "Positivo",
            SentimentName::Negativo => "Negativo",
            SentimentName::Neutral => "Neutral",
            SentimentName::Pregunta => "Pregunta",
        }
    }
}

impl fmt::Display for SentimentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentiment name that matched neither a display name nor a label code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sentiment '{0}' (expected Positivo, Negativo, Neutral or Pregunta)")]
pub struct UnknownSentiment(pub String);

impl FromStr for SentimentName {
    type Err = UnknownSentiment;

    /// Accepts display names case-insensitively, plus the raw label codes.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(name) = SentimentName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(trimmed))
        {
            return Ok(name);
        }
        Label::from_code(&trimmed.to_ascii_lowercase())
            .map(Label::sentiment)
            .ok_or_else(|| UnknownSentiment(value.to_string()))
    }
}
