//! Document loading and parsing errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while reading or parsing an article.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("Document has no root element")]
    Empty,
}

impl ErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::DOCUMENT_IO,
            _ => error_code::DOCUMENT_MALFORMED,
        }
    }
}
