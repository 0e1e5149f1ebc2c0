//! Run configuration
//!
//! Built-in defaults mirror the reference phrase lists; an optional TOML
//! file overrides them, and CLI flags override the file. Precedence:
//! CLI > file > defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ClipError, ClipResult};
use crate::matcher::AYANO_VARIANTS;

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Phrase variants searched for in subtitle text, in priority order
    pub phrases: Vec<String>,
    /// Label used in output clip file names
    pub label: String,
    /// Video file extensions included by the directory scan
    pub extensions: Vec<String>,
    /// Seconds added to every clip's end boundary
    pub end_offset_secs: Option<f64>,
}

/// On-disk TOML shape; every field optional so a file may override only
/// what it cares about
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    phrases: Option<Vec<String>>,
    label: Option<String>,
    extensions: Option<Vec<String>>,
    end_offset_secs: Option<f64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            phrases: AYANO_VARIANTS.iter().map(|s| s.to_string()).collect(),
            label: "TOSHINO_KYOUKO".to_string(),
            extensions: vec!["mp4".to_string(), "mkv".to_string()],
            end_offset_secs: None,
        }
    }
}

impl RunConfig {
    /// Load configuration: defaults, overridden by `config_path` if given,
    /// overridden by the CLI-level end offset if given.
    pub fn load(config_path: Option<&Path>, end_offset_secs: Option<f64>) -> ClipResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            let text = fs::read_to_string(path).map_err(|e| ClipError::ConfigError {
                message: format!("cannot read {:?}: {}", path, e),
            })?;
            let file: FileConfig = toml::from_str(&text).map_err(|e| ClipError::ConfigError {
                message: format!("cannot parse {:?}: {}", path, e),
            })?;
            config.apply(file);
            info!("Loaded configuration from {:?}", path);
        }

        if end_offset_secs.is_some() {
            config.end_offset_secs = end_offset_secs;
        }

        if config.phrases.is_empty() {
            return Err(ClipError::ConfigError {
                message: "phrase list must not be empty".to_string(),
            });
        }
        if let Some(offset) = config.end_offset_secs {
            if !offset.is_finite() {
                return Err(ClipError::ConfigError {
                    message: format!("end offset must be finite, got {}", offset),
                });
            }
        }

        Ok(config)
    }

    fn apply(&mut self, file: FileConfig) {
        if let Some(phrases) = file.phrases {
            self.phrases = phrases;
        }
        if let Some(label) = file.label {
            self.label = label;
        }
        if let Some(extensions) = file.extensions {
            self.extensions = extensions;
        }
        if file.end_offset_secs.is_some() {
            self.end_offset_secs = file.end_offset_secs;
        }
    }
}
