//! flyhelper-analysis: gene mention extraction and scoring for article XML.
//!
//! One pass over a paper:
//! - Document: arena tree parsed from the article XML, with parent indices
//! - Exceptions: false-positive filter with alphanumeric boundary matching
//! - Sections: body/introduction heuristic deciding which spans count
//! - Extractor: italic spans -> dictionary hits -> per-gene counts and evidence
//! - Snippets: supporting text in `none`, `short`, or `long` mode
//! - Confidence: gene-frequency, word-frequency, and raw-count metrics
//! - Rescorer: sequence-classifier probability per gene
//! - Scorer / Pipeline: strategy selection and multi-paper runs

pub mod confidence;
pub mod dictionary;
pub mod document;
pub mod exceptions;
pub mod extractor;
pub mod pipeline;
pub mod rescorer;
pub mod scorer;
pub mod sections;
pub mod snippets;
pub mod table;

pub use confidence::{aggregate, ConfidenceMap, ConfidenceRecord, MetricFlags, Score};
pub use dictionary::GeneDictionary;
pub use document::{Document, Node, NodeId, Paper};
pub use exceptions::{is_exception, ExceptionSet, LazyExceptions};
pub use extractor::{extract, Candidate, Evidence, ExtractOptions, Extraction, FormCount};
pub use pipeline::{DocumentReport, GeneFinder, ReportRow};
pub use rescorer::{Prediction, Rescorer, SequenceClassifier};
pub use scorer::{DictionaryScorer, Scorer};
pub use sections::is_in_relevant_section;
pub use table::GeneTable;
