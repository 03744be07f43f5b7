//! A paper: identifier, raw source, and parsed tree.

use std::path::Path;

use flyhelper_core::errors::DocumentError;

use super::Document;

/// One article ready for extraction.
#[derive(Debug, Clone)]
pub struct Paper {
    id: String,
    source: String,
    document: Document,
    word_count: usize,
}

impl Paper {
    /// Parse `source` as the article identified by `id`.
    pub fn new(id: impl Into<String>, source: String) -> Result<Self, DocumentError> {
        let document = Document::parse(&source)?;
        let word_count = source.split_whitespace().count();
        Ok(Self {
            id: id.into(),
            source,
            document,
            word_count,
        })
    }

    /// Read and parse an article file. The id is the file stem
    /// (`PMC123456.nxml` -> `PMC123456`).
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(id, source)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whitespace-delimited tokens in the raw source, markup included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
