//! Sequence-classifier configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_POSITIVE_LABEL;

/// Configuration for the model rescoring path.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    /// Score genes with the sequence classifier instead of counts. Default: false.
    pub enabled: Option<bool>,
    /// Label meaning "tag this paper with the gene". Default: "LABEL_1".
    pub positive_label: Option<String>,
}

impl ModelConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn effective_positive_label(&self) -> &str {
        self.positive_label.as_deref().unwrap_or(DEFAULT_POSITIVE_LABEL)
    }
}
