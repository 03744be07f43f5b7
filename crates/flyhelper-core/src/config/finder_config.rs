//! Top-level finder configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{MatchingConfig, ModelConfig, OutputConfig, PathsConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FLYHELPER_*`)
/// 2. Project config (`flyhelper.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FinderConfig {
    pub output: OutputConfig,
    pub paths: PathsConfig,
    pub matching: MatchingConfig,
    pub model: ModelConfig,
}

impl FinderConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: FinderConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &FinderConfig) -> Result<(), ConfigError> {
        config.output.effective_snippet_mode()?;
        config.matching.effective_boundary_rule()?;
        if let Some(label) = config.model.positive_label.as_deref() {
            if label.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "model.positive_label".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut FinderConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FinderConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut FinderConfig, other: &FinderConfig) {
        // Output
        if other.output.snippet_type.is_some() {
            base.output.snippet_type = other.output.snippet_type.clone();
        }
        if other.output.gene_occurrence.is_some() {
            base.output.gene_occurrence = other.output.gene_occurrence;
        }
        if other.output.gene_frequency.is_some() {
            base.output.gene_frequency = other.output.gene_frequency;
        }
        if other.output.word_frequency.is_some() {
            base.output.word_frequency = other.output.word_frequency;
        }
        if other.output.raw_occurrence.is_some() {
            base.output.raw_occurrence = other.output.raw_occurrence;
        }

        // Paths
        if other.paths.exceptions.is_some() {
            base.paths.exceptions = other.paths.exceptions.clone();
        }
        if other.paths.gene_dictionary.is_some() {
            base.paths.gene_dictionary = other.paths.gene_dictionary.clone();
        }

        // Matching
        if other.matching.exception_boundary.is_some() {
            base.matching.exception_boundary = other.matching.exception_boundary.clone();
        }

        // Model
        if other.model.enabled.is_some() {
            base.model.enabled = other.model.enabled;
        }
        if other.model.positive_label.is_some() {
            base.model.positive_label = other.model.positive_label.clone();
        }
    }

    /// Apply `FLYHELPER_*` environment variable overrides.
    /// Unparsable boolean values are ignored.
    fn apply_env_overrides(config: &mut FinderConfig) {
        if let Ok(val) = std::env::var("FLYHELPER_SNIPPET_TYPE") {
            config.output.snippet_type = Some(val);
        }
        if let Some(v) = env_bool("FLYHELPER_OUTPUT_GENE_OCCURRENCE") {
            config.output.gene_occurrence = Some(v);
        }
        if let Some(v) = env_bool("FLYHELPER_OUTPUT_GENE_FREQUENCY") {
            config.output.gene_frequency = Some(v);
        }
        if let Some(v) = env_bool("FLYHELPER_OUTPUT_WORD_FREQUENCY") {
            config.output.word_frequency = Some(v);
        }
        if let Some(v) = env_bool("FLYHELPER_OUTPUT_RAW_OCCURRENCE") {
            config.output.raw_occurrence = Some(v);
        }
        if let Ok(val) = std::env::var("FLYHELPER_EXCEPTIONS_PATH") {
            config.paths.exceptions = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("FLYHELPER_GENE_DICTIONARY") {
            config.paths.gene_dictionary = Some(PathBuf::from(val));
        }
        if let Some(v) = env_bool("FLYHELPER_USE_MODEL") {
            config.model.enabled = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|v| v.parse::<bool>().ok())
}
