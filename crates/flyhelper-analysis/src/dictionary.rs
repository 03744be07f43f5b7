//! Gene synonym dictionary.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use flyhelper_core::errors::DictionaryError;

/// Surface form -> gene identifier, plus gene identifier -> primary symbol.
///
/// Built once per run and shared read-only across papers. Surface forms
/// cover current symbols, full names, and synonyms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneDictionary {
    synonyms: FxHashMap<String, String>,
    symbols: FxHashMap<String, String>,
}

impl GeneDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a surface form to a gene. A later insert for the same form wins.
    pub fn insert(&mut self, surface: impl Into<String>, gene_id: impl Into<String>) {
        self.synonyms.insert(surface.into(), gene_id.into());
    }

    /// Record the primary symbol of a gene.
    pub fn insert_symbol(&mut self, gene_id: impl Into<String>, symbol: impl Into<String>) {
        self.symbols.insert(gene_id.into(), symbol.into());
    }

    pub fn gene_for(&self, surface: &str) -> Option<&str> {
        self.synonyms.get(surface).map(String::as_str)
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.synonyms.contains_key(surface)
    }

    pub fn symbol_for(&self, gene_id: &str) -> Option<&str> {
        self.symbols.get(gene_id).map(String::as_str)
    }

    /// Number of surface forms.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Parse a prebuilt dictionary: `{"synonyms": {...}, "symbols": {...}}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a prebuilt dictionary file.
    pub fn from_json_file(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DictionaryError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DictionaryError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_json_str(&content).map_err(|e| DictionaryError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl<S: Into<String>, G: Into<String>> FromIterator<(S, G)> for GeneDictionary {
    fn from_iter<I: IntoIterator<Item = (S, G)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (surface, gene_id) in iter {
            dictionary.insert(surface, gene_id);
        }
        dictionary
    }
}
