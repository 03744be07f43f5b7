//! Gene dictionary errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading a prebuilt gene dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Gene dictionary not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading gene dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Gene dictionary parse error in {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

impl ErrorCode for DictionaryError {
    fn error_code(&self) -> &'static str {
        error_code::DICTIONARY_ERROR
    }
}
