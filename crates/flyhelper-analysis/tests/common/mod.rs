//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use flyhelper_analysis::GeneDictionary;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

pub fn paper_path(name: &str) -> PathBuf {
    fixtures_dir().join("papers").join(name)
}

pub fn exceptions_path() -> PathBuf {
    fixtures_dir().join("resources/exceptions.txt")
}

pub fn fixture_dictionary() -> GeneDictionary {
    GeneDictionary::from_json_file(&fixtures_dir().join("resources/gene_dict.json")).unwrap()
}

/// `<article><body>` with one section per entry, each holding a paragraph.
pub fn article_with_sections(sections: &[&str]) -> String {
    let mut xml = String::from("<article><body>");
    for section in sections {
        xml.push_str("<sec><p>");
        xml.push_str(section);
        xml.push_str("</p></sec>");
    }
    xml.push_str("</body></article>");
    xml
}
