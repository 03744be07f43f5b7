//! Exception list errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading the false-positive exception list.
#[derive(Debug, thiserror::Error)]
pub enum ExceptionError {
    #[error("Exception list not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading exception list {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for ExceptionError {
    fn error_code(&self) -> &'static str {
        error_code::EXCEPTIONS_NOT_FOUND
    }
}
