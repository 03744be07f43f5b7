//! Stable error codes shared by every error enum.

/// Trait for mapping an error onto a stable, machine-readable code.
/// Every error enum implements this so log lines and reports carry the
/// same identifiers regardless of message wording.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DOCUMENT_IO: &str = "DOCUMENT_IO";
pub const DOCUMENT_MALFORMED: &str = "DOCUMENT_MALFORMED";
pub const EXCEPTIONS_NOT_FOUND: &str = "EXCEPTIONS_NOT_FOUND";
pub const DICTIONARY_ERROR: &str = "DICTIONARY_ERROR";
pub const CONFIDENCE_ERROR: &str = "CONFIDENCE_ERROR";
pub const SCORER_NOT_INITIALIZED: &str = "SCORER_NOT_INITIALIZED";
pub const RESCORE_ERROR: &str = "RESCORE_ERROR";
