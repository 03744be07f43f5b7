//! Gene dictionary loading tests.

mod common;

use flyhelper_analysis::GeneDictionary;
use flyhelper_core::errors::{DictionaryError, ErrorCode};

#[test]
fn test_fixture_dictionary_loads() {
    let dictionary = common::fixture_dictionary();
    assert_eq!(dictionary.gene_for("wingless"), Some("FBgn0284084"));
    assert_eq!(dictionary.symbol_for("FBgn0000157"), Some("Dll"));
    assert!(!dictionary.contains("Drosophila"));
}

#[test]
fn test_missing_file_is_not_found() {
    let err = GeneDictionary::from_json_file(&common::fixtures_dir().join("nope.json")).unwrap_err();
    assert!(matches!(err, DictionaryError::NotFound { .. }));
    assert_eq!(err.error_code(), "DICTIONARY_ERROR");
}

#[test]
fn test_unreadable_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("gene_dict.json");
    std::fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();

    let err = GeneDictionary::from_json_file(&path).unwrap_err();
    assert!(matches!(err, DictionaryError::Io { .. }));
    assert_eq!(err.error_code(), "DICTIONARY_ERROR");
}

#[test]
fn test_invalid_json_is_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("gene_dict.json");
    std::fs::write(&path, "{\"synonyms\": [").unwrap();

    let err = GeneDictionary::from_json_file(&path).unwrap_err();
    assert!(matches!(err, DictionaryError::ParseError { .. }));
}
