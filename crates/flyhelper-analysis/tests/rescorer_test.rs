//! Model rescoring with a stub classifier.

mod common;

use std::sync::{Arc, Mutex};

use flyhelper_analysis::rescorer::build_model_input;
use flyhelper_analysis::{
    extract, ExceptionSet, ExtractOptions, GeneDictionary, Paper, Prediction, Rescorer,
    SequenceClassifier,
};
use flyhelper_core::config::BoundaryRule;
use flyhelper_core::errors::{ErrorCode, RescoreError};

/// Records every input and answers with a fixed prediction.
struct RecordingClassifier {
    label: &'static str,
    score: f64,
    inputs: Arc<Mutex<Vec<String>>>,
}

impl SequenceClassifier for RecordingClassifier {
    fn classify(&self, text: &str) -> Result<Prediction, RescoreError> {
        self.inputs.lock().unwrap().push(text.to_string());
        Ok(Prediction {
            label: self.label.to_string(),
            score: self.score,
        })
    }

    fn name(&self) -> &str {
        "recording"
    }
}

fn recording(label: &'static str, score: f64) -> (Box<RecordingClassifier>, Arc<Mutex<Vec<String>>>) {
    let inputs = Arc::new(Mutex::new(Vec::new()));
    let classifier = Box::new(RecordingClassifier {
        label,
        score,
        inputs: Arc::clone(&inputs),
    });
    (classifier, inputs)
}

fn fixture_extraction(paper: &Paper, dictionary: &GeneDictionary) -> flyhelper_analysis::Extraction {
    let exceptions = ExceptionSet::load(&common::exceptions_path(), BoundaryRule::Legacy).unwrap();
    extract(paper.document(), dictionary, &exceptions, &ExtractOptions::default())
}

#[test]
fn test_fixture_model_inputs() {
    let paper = Paper::from_path(&common::paper_path("PMC1000001.nxml")).unwrap();
    let dictionary = common::fixture_dictionary();
    let extraction = fixture_extraction(&paper, &dictionary);

    let rescorer = Rescorer::new("LABEL_1");
    let (classifier, inputs) = recording("LABEL_1", 0.8);
    rescorer.initialize(classifier).unwrap();

    let abstract_text = paper.document().abstract_text();
    let probabilities = rescorer
        .score_paper(&extraction, &dictionary, &abstract_text)
        .unwrap();

    let genes: Vec<&str> = probabilities.genes().collect();
    assert_eq!(genes, vec!["FBgn0284084", "FBgn0004647", "FBgn0000157"]);
    assert!(probabilities.values().all(|&p| (p - 0.8).abs() < 1e-12));

    let inputs = inputs.lock().unwrap();
    assert_eq!(
        inputs[0],
        "wg 6 wg 1 wingless. We show that wg expression at the dorsoventral boundary requires Notch activity."
    );
    assert!(inputs[1].starts_with("N 3 Notch. "));
    assert!(inputs[2].starts_with("Dll 1 Dll. "));
}

#[test]
fn test_negative_label_is_inverted() {
    let rescorer = Rescorer::new("LABEL_1");
    let (classifier, _) = recording("LABEL_0", 0.9);
    rescorer.initialize(classifier).unwrap();
    let p = rescorer.probability("wg 1 wg. abstract").unwrap();
    assert!((p - 0.1).abs() < 1e-12);
}

#[test]
fn test_uninitialized_rescorer_fails() {
    let paper = Paper::from_path(&common::paper_path("PMC1000001.nxml")).unwrap();
    let dictionary = common::fixture_dictionary();
    let extraction = fixture_extraction(&paper, &dictionary);

    let rescorer = Rescorer::new("LABEL_1");
    let err = rescorer.score_paper(&extraction, &dictionary, "").unwrap_err();
    assert!(matches!(err, RescoreError::NotInitialized));
    assert_eq!(err.error_code(), "SCORER_NOT_INITIALIZED");
}

#[test]
fn test_second_initialize_fails() {
    let rescorer = Rescorer::new("LABEL_1");
    rescorer.initialize(recording("LABEL_1", 0.5).0).unwrap();
    let err = rescorer.initialize(recording("LABEL_1", 0.5).0).unwrap_err();
    assert!(matches!(err, RescoreError::AlreadyInitialized));
    assert!(rescorer.is_initialized());
}

#[test]
fn test_missing_symbol_fails() {
    let dictionary: GeneDictionary = [("abc1", "FBgn001")].into_iter().collect();
    let xml = common::article_with_sections(&["<italic>abc1</italic>"]);
    let paper = Paper::new("no-symbol", xml).unwrap();
    let extraction = extract(
        paper.document(),
        &dictionary,
        &ExceptionSet::default(),
        &ExtractOptions::default(),
    );

    let rescorer = Rescorer::new("LABEL_1");
    rescorer.initialize(recording("LABEL_1", 0.5).0).unwrap();
    let err = rescorer.score_paper(&extraction, &dictionary, "").unwrap_err();
    assert!(matches!(err, RescoreError::UnknownSymbol { ref gene_id } if gene_id == "FBgn001"));
}

#[test]
fn test_introduction_only_gene_is_still_scored() {
    let mut dictionary: GeneDictionary = [("abc1", "FBgn001")].into_iter().collect();
    dictionary.insert_symbol("FBgn001", "abc1");
    let xml = common::article_with_sections(&["<italic>abc1</italic> only here"]);
    let paper = Paper::new("intro-only", xml).unwrap();
    let extraction = extract(
        paper.document(),
        &dictionary,
        &ExceptionSet::default(),
        &ExtractOptions::default(),
    );
    assert_eq!(extraction.total_relevant_mentions, 0);

    let rescorer = Rescorer::new("LABEL_1");
    let (classifier, inputs) = recording("LABEL_1", 0.7);
    rescorer.initialize(classifier).unwrap();
    let probabilities = rescorer.score_paper(&extraction, &dictionary, "").unwrap();
    assert_eq!(probabilities.len(), 1);
    let summary = extraction.candidate_summary(&dictionary);
    let expected = build_model_input("abc1", summary.get("FBgn001").unwrap(), "");
    assert_eq!(inputs.lock().unwrap()[0], expected);
    assert_eq!(expected, "abc1 1 abc1. ");
}
