//! Dashboard settings persisted as `config.toml` in the app directory.
//!
//! Settings only ever describe where the corpus lives and how the dashboard
//! presents it; computed data is never written here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::corpus::{CorpusPaths, FallbackEncoding};
use crate::sentiment::{Selection, SentimentName};

/// Default filename used to store the dashboard configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that may occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Aggregate settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub corpus: CorpusSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// Where the four corpus files live and how to decode them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSettings {
    /// Base directory for relative corpus paths. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_train_text")]
    pub train_text: PathBuf,
    #[serde(default = "default_train_labels")]
    pub train_labels: PathBuf,
    #[serde(default = "default_test_text")]
    pub test_text: PathBuf,
    #[serde(default = "default_test_labels")]
    pub test_labels: PathBuf,
    #[serde(default)]
    pub fallback_encoding: FallbackEncoding,
}

/// Presentation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Selection applied when none is given on the command line.
    #[serde(default = "default_selection")]
    pub default_selection: Vec<SentimentName>,
    /// Upper bound on histogram bins.
    #[serde(default = "default_histogram_max_bins")]
    pub histogram_max_bins: usize,
    /// Evaluation points per density curve.
    #[serde(default = "default_density_steps")]
    pub density_steps: usize,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            train_text: default_train_text(),
            train_labels: default_train_labels(),
            test_text: default_test_text(),
            test_labels: default_test_labels(),
            fallback_encoding: FallbackEncoding::default(),
        }
    }
}

impl CorpusSettings {
    /// Resolve the four file paths against `data_dir`. Absolute paths are kept as-is.
    pub fn paths(&self) -> CorpusPaths {
        let resolve = |path: &Path| match &self.data_dir {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        };
        CorpusPaths {
            train_text: resolve(&self.train_text),
            train_labels: resolve(&self.train_labels),
            test_text: resolve(&self.test_text),
            test_labels: resolve(&self.test_labels),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_selection: default_selection(),
            histogram_max_bins: default_histogram_max_bins(),
            density_steps: default_density_steps(),
        }
    }
}

impl DashboardSettings {
    pub fn default_selection(&self) -> Selection {
        self.default_selection.iter().copied().collect()
    }

    /// Clamp values a hand-edited file might set to zero.
    fn normalized(mut self) -> Self {
        self.histogram_max_bins = self.histogram_max_bins.max(1);
        self.density_steps = self.density_steps.max(2);
        self
    }
}

fn default_train_text() -> PathBuf {
    PathBuf::from("thai_nlp/train.txt")
}

fn default_train_labels() -> PathBuf {
    PathBuf::from("thai_nlp/train_label.txt")
}

fn default_test_text() -> PathBuf {
    PathBuf::from("thai_nlp/test.txt")
}

fn default_test_labels() -> PathBuf {
    PathBuf::from("thai_nlp/test_label.txt")
}

fn default_selection() -> Vec<SentimentName> {
    SentimentName::ALL.to_vec()
}

fn default_histogram_max_bins() -> usize {
    30
}

fn default_density_steps() -> usize {
    100
}

/// Resolve the configuration file path inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, returning defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from(&config_path()?)
}

/// Load configuration from `path`, returning defaults if the file is missing.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    config.dashboard = config.dashboard.normalized();
    Ok(config)
}

/// Persist configuration to the app directory.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
