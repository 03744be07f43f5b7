//! Resource locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXCEPTIONS_PATH, DEFAULT_GENE_DICTIONARY_PATH};

/// Paths to the resources the finder reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Newline-delimited false-positive list.
    pub exceptions: Option<PathBuf>,
    /// Prebuilt gene dictionary (JSON).
    pub gene_dictionary: Option<PathBuf>,
}

impl PathsConfig {
    pub fn effective_exceptions(&self) -> PathBuf {
        self.exceptions
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXCEPTIONS_PATH))
    }

    pub fn effective_gene_dictionary(&self) -> PathBuf {
        self.gene_dictionary
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GENE_DICTIONARY_PATH))
    }
}
