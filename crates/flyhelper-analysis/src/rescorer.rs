//! Sequence-classifier rescoring.
//!
//! The classifier itself lives outside this crate: anything implementing
//! [`SequenceClassifier`] can be installed once into a [`Rescorer`].

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, info};

use flyhelper_core::errors::RescoreError;

use crate::dictionary::GeneDictionary;
use crate::extractor::{Extraction, FormCount};
use crate::table::GeneTable;

/// Label and confidence returned by a binary sequence classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// Opaque text classifier.
pub trait SequenceClassifier: Send + Sync {
    /// Classify a short text into one of two labels.
    fn classify(&self, text: &str) -> Result<Prediction, RescoreError>;

    /// Human-readable classifier name.
    fn name(&self) -> &str;
}

/// Maps extracted evidence to per-gene probabilities through an installed
/// classifier. Using it before [`Rescorer::initialize`] is an error.
pub struct Rescorer {
    classifier: OnceLock<Box<dyn SequenceClassifier>>,
    positive_label: String,
}

impl fmt::Debug for Rescorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rescorer")
            .field("classifier", &self.classifier.get().map(|c| c.name()))
            .field("positive_label", &self.positive_label)
            .finish()
    }
}

impl Rescorer {
    pub fn new(positive_label: impl Into<String>) -> Self {
        Self {
            classifier: OnceLock::new(),
            positive_label: positive_label.into(),
        }
    }

    /// Install the classifier. Only the first call succeeds.
    pub fn initialize(&self, classifier: Box<dyn SequenceClassifier>) -> Result<(), RescoreError> {
        let name = classifier.name().to_string();
        self.classifier
            .set(classifier)
            .map_err(|_| RescoreError::AlreadyInitialized)?;
        info!(classifier = %name, "sequence classifier initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.classifier.get().is_some()
    }

    pub fn positive_label(&self) -> &str {
        &self.positive_label
    }

    /// Probability that `input` supports tagging the paper with the gene.
    pub fn probability(&self, input: &str) -> Result<f64, RescoreError> {
        let classifier = self.classifier.get().ok_or(RescoreError::NotInitialized)?;
        let prediction = classifier.classify(input)?;
        probability_from(&prediction, &self.positive_label)
    }

    /// One probability per gene with at least one accepted candidate anywhere
    /// in the paper.
    pub fn score_paper(
        &self,
        extraction: &Extraction,
        dictionary: &GeneDictionary,
        abstract_text: &str,
    ) -> Result<GeneTable<f64>, RescoreError> {
        if !self.is_initialized() {
            return Err(RescoreError::NotInitialized);
        }

        let mut probabilities = GeneTable::new();
        for (gene_id, forms) in extraction.candidate_summary(dictionary).iter() {
            let symbol = dictionary
                .symbol_for(gene_id)
                .ok_or_else(|| RescoreError::UnknownSymbol {
                    gene_id: gene_id.to_string(),
                })?;
            let input = build_model_input(symbol, forms, abstract_text);
            let p = self.probability(&input)?;
            debug!(gene = gene_id, probability = p, "rescored gene");
            probabilities.insert(gene_id, p);
        }
        Ok(probabilities)
    }
}

/// `"<symbol> <count> <form> <count> <form>. <abstract>"`
pub fn build_model_input(symbol: &str, forms: &[FormCount], abstract_text: &str) -> String {
    let evidence = forms
        .iter()
        .map(|f| format!("{} {}", f.count, f.form))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{symbol} {evidence}. {abstract_text}")
}

/// Positive label: its score. Any other label: one minus its score.
pub fn probability_from(prediction: &Prediction, positive_label: &str) -> Result<f64, RescoreError> {
    if !(0.0..=1.0).contains(&prediction.score) {
        return Err(RescoreError::ScoreOutOfRange {
            score: prediction.score,
        });
    }
    if prediction.label == positive_label {
        Ok(prediction.score)
    } else {
        Ok(1.0 - prediction.score)
    }
}
