//! Error code and conversion tests.

use std::path::PathBuf;

use flyhelper_core::errors::{
    ConfidenceError, ConfigError, DictionaryError, DocumentError, ErrorCode, ExceptionError,
    PipelineError, PipelineResult, RescoreError,
};

#[test]
fn test_subsystem_codes() {
    let config = ConfigError::FileNotFound {
        path: "flyhelper.toml".to_string(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let io = DocumentError::Io {
        path: PathBuf::from("missing.nxml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(io.error_code(), "DOCUMENT_IO");
    assert_eq!(DocumentError::Empty.error_code(), "DOCUMENT_MALFORMED");

    let exceptions = ExceptionError::NotFound {
        path: PathBuf::from("exceptions.txt"),
    };
    assert_eq!(exceptions.error_code(), "EXCEPTIONS_NOT_FOUND");

    let dictionary = DictionaryError::ParseError {
        path: PathBuf::from("gene_dict.json"),
        message: "expected value".to_string(),
    };
    assert_eq!(dictionary.error_code(), "DICTIONARY_ERROR");

    let zero = ConfidenceError::ZeroDenominator {
        metric: "word",
        genes: 2,
    };
    assert_eq!(zero.error_code(), "CONFIDENCE_ERROR");

    assert_eq!(RescoreError::NotInitialized.error_code(), "SCORER_NOT_INITIALIZED");
    assert_eq!(RescoreError::AlreadyInitialized.error_code(), "RESCORE_ERROR");
}

#[test]
fn test_pipeline_error_keeps_inner_code() {
    let err: PipelineError = DocumentError::Malformed {
        position: 42,
        message: "unexpected end tag".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "DOCUMENT_MALFORMED");

    let err: PipelineError = RescoreError::NotInitialized.into();
    assert_eq!(err.error_code(), "SCORER_NOT_INITIALIZED");
}

#[test]
fn test_tagged_message() {
    let err = ConfidenceError::ZeroDenominator {
        metric: "genes",
        genes: 3,
    };
    let tagged = err.tagged();
    assert!(tagged.starts_with("[CONFIDENCE_ERROR] "));
    assert!(tagged.contains("genes"));
}

#[test]
fn test_pipeline_result_collects_errors() {
    let mut result: PipelineResult<Vec<String>> = PipelineResult::new(vec!["a".to_string()]);
    assert!(result.is_clean());

    result.add_error("PMC1", DocumentError::Empty.into());
    result.add_error("PMC2", RescoreError::NotInitialized.into());

    assert!(!result.is_clean());
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.errors[1].0, "PMC2");
    assert_eq!(result.data.len(), 1);
}
