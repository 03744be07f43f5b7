//! Confidence aggregation errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while normalizing occurrence counts.
#[derive(Debug, thiserror::Error)]
pub enum ConfidenceError {
    #[error("Cannot compute {metric} confidence for {genes} gene(s): denominator is zero")]
    ZeroDenominator { metric: &'static str, genes: usize },
}

impl ErrorCode for ConfidenceError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIDENCE_ERROR
    }
}
