//! Error handling for the gene finder.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod confidence_error;
pub mod dictionary_error;
pub mod document_error;
pub mod error_code;
pub mod exception_error;
pub mod pipeline_error;
pub mod rescore_error;

pub use confidence_error::ConfidenceError;
pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use document_error::DocumentError;
pub use error_code::ErrorCode;
pub use exception_error::ExceptionError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use rescore_error::RescoreError;
