//! Output configuration: evidence verbosity and enabled confidence metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How much supporting text is kept for each accepted occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetMode {
    /// No snippet text.
    #[default]
    None,
    /// Surface form plus up to 100 trailing characters.
    Short,
    /// All text under the span's parent element.
    Long,
}

impl SnippetMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for SnippetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SnippetMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(ConfigError::InvalidValue {
                field: "output.snippet_type".to_string(),
                message: format!("must be 'long', 'short', or 'none', got '{other}'"),
            }),
        }
    }
}

/// Configuration for extraction output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Snippet verbosity: "long", "short", or "none". Default: "none".
    pub snippet_type: Option<String>,
    /// Emit the exact surface form of each occurrence. Default: false.
    pub gene_occurrence: Option<bool>,
    /// Score genes by share of all relevant gene mentions. Default: true.
    pub gene_frequency: Option<bool>,
    /// Score genes by occurrences per document word. Default: false.
    pub word_frequency: Option<bool>,
    /// Report the raw occurrence count. Default: false.
    pub raw_occurrence: Option<bool>,
}

impl OutputConfig {
    /// Returns the parsed snippet mode, defaulting to `none`.
    /// An unrecognized value is an error, never a silent default.
    pub fn effective_snippet_mode(&self) -> Result<SnippetMode, ConfigError> {
        match self.snippet_type.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(SnippetMode::None),
        }
    }

    pub fn effective_gene_occurrence(&self) -> bool {
        self.gene_occurrence.unwrap_or(false)
    }

    pub fn effective_gene_frequency(&self) -> bool {
        self.gene_frequency.unwrap_or(true)
    }

    pub fn effective_word_frequency(&self) -> bool {
        self.word_frequency.unwrap_or(false)
    }

    pub fn effective_raw_occurrence(&self) -> bool {
        self.raw_occurrence.unwrap_or(false)
    }
}
