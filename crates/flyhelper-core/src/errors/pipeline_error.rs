//! Pipeline errors and non-fatal error collection.

use super::error_code::ErrorCode;
use super::{
    ConfidenceError, ConfigError, DictionaryError, DocumentError, ExceptionError, RescoreError,
};

/// Errors that can occur while analyzing a paper.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Exception list error: {0}")]
    Exceptions(#[from] ExceptionError),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Confidence error: {0}")]
    Confidence(#[from] ConfidenceError),

    #[error("Rescore error: {0}")]
    Rescore(#[from] RescoreError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Document(e) => e.error_code(),
            Self::Exceptions(e) => e.error_code(),
            Self::Dictionary(e) => e.error_code(),
            Self::Confidence(e) => e.error_code(),
            Self::Rescore(e) => e.error_code(),
        }
    }
}

/// Result of a batch run that accumulates non-fatal errors.
/// Allows partial results to be returned even when some papers fail.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run, keyed by document id.
    pub errors: Vec<(String, PipelineError)>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new pipeline result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error for a document.
    pub fn add_error(&mut self, document_id: impl Into<String>, error: PipelineError) {
        self.errors.push((document_id.into(), error));
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
