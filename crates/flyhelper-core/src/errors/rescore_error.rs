//! Model rescoring errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur on the sequence-classifier path.
#[derive(Debug, thiserror::Error)]
pub enum RescoreError {
    #[error("Sequence classifier used before initialization")]
    NotInitialized,

    #[error("Sequence classifier already initialized")]
    AlreadyInitialized,

    #[error("No primary symbol for gene {gene_id}")]
    UnknownSymbol { gene_id: String },

    #[error("Sequence classifier failed: {0}")]
    Classifier(String),

    #[error("Classifier score {score} outside [0, 1]")]
    ScoreOutOfRange { score: f64 },
}

impl ErrorCode for RescoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInitialized => error_code::SCORER_NOT_INITIALIZED,
            _ => error_code::RESCORE_ERROR,
        }
    }
}
