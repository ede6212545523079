//! Reads corpus files into trimmed line sequences.
//!
//! Each file is decoded as UTF-8 first. A file that isn't valid UTF-8 is
//! decoded again, in full, with the configured single-byte fallback. There is
//! no third attempt.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading corpus files. All of them are fatal to a run.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file does not exist.
    #[error("Corpus file not found: {path}")]
    FileNotFound { path: PathBuf },
    /// The file exists but could not be read.
    #[error("Failed to read corpus file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid UTF-8 and no fallback encoding is enabled.
    #[error("Corpus file {path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

/// Single-byte encoding tried when UTF-8 decoding fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackEncoding {
    /// ISO-8859-1: every byte maps to the code point of the same value.
    #[default]
    Latin1,
    /// Fail with [`CorpusError::Decode`] instead of falling back.
    None,
}

/// Locations of the four corpus files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    pub train_text: PathBuf,
    pub train_labels: PathBuf,
    pub test_text: PathBuf,
    pub test_labels: PathBuf,
}

/// The four corpus files as loaded, before any alignment checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCorpus {
    pub train_text: Vec<String>,
    pub train_labels: Vec<String>,
    pub test_text: Vec<String>,
    pub test_labels: Vec<String>,
}

/// Load a file as trimmed lines, one entry per line.
pub fn load_lines(path: &Path, fallback: FallbackEncoding) -> Result<Vec<String>, CorpusError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CorpusError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let text = decode_text(bytes, fallback).map_err(|source| CorpusError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&text);
    tracing::debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Decode raw bytes as UTF-8, retrying the whole buffer with `fallback` on failure.
pub fn decode_text(
    bytes: Vec<u8>,
    fallback: FallbackEncoding,
) -> Result<String, std::string::FromUtf8Error> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => match fallback {
            FallbackEncoding::Latin1 => {
                tracing::warn!(
                    "Invalid UTF-8 at byte {}; decoding as Latin-1",
                    err.utf8_error().valid_up_to()
                );
                Ok(err.as_bytes().iter().map(|&byte| char::from(byte)).collect())
            }
            FallbackEncoding::None => Err(err),
        },
    }
}

/// Split text into lines and trim surrounding whitespace from each.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Blank lines survive as empty
/// strings so line `i` of a text file still pairs with line `i` of its label
/// file. A trailing line break does not add a final empty entry.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\n', '\r']) else {
            lines.push(rest.trim().to_string());
            break;
        };
        lines.push(rest[..end].trim().to_string());
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
    }
    lines
}

/// Load all four corpus files, stopping at the first failure.
pub fn load_corpus(paths: &CorpusPaths, fallback: FallbackEncoding) -> Result<RawCorpus, CorpusError> {
    Ok(RawCorpus {
        train_text: load_lines(&paths.train_text, fallback)?,
        train_labels: load_lines(&paths.train_labels, fallback)?,
        test_text: load_lines(&paths.test_text, fallback)?,
        test_labels: load_lines(&paths.test_labels, fallback)?,
    })
}
