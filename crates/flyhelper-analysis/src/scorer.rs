//! Scoring strategy, chosen once from configuration.

use tracing::debug;

use flyhelper_core::config::{FinderConfig, SnippetMode};
use flyhelper_core::errors::{ConfigError, PipelineError};

use crate::confidence::{aggregate, MetricFlags};
use crate::dictionary::GeneDictionary;
use crate::document::Paper;
use crate::exceptions::ExceptionSet;
use crate::extractor::{extract, ExtractOptions};
use crate::pipeline::DocumentReport;
use crate::rescorer::Rescorer;

/// Count-based confidence: extraction followed by metric aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DictionaryScorer {
    pub options: ExtractOptions,
    pub flags: MetricFlags,
}

impl DictionaryScorer {
    pub fn new(options: ExtractOptions, flags: MetricFlags) -> Self {
        Self { options, flags }
    }

    pub fn score(
        &self,
        paper: &Paper,
        dictionary: &GeneDictionary,
        exceptions: &ExceptionSet,
    ) -> Result<DocumentReport, PipelineError> {
        let extraction = extract(paper.document(), dictionary, exceptions, &self.options);
        let confidences = aggregate(
            &extraction.occurrences,
            extraction.total_relevant_mentions,
            paper.word_count(),
            self.flags,
        )?;
        Ok(DocumentReport::Confidence {
            confidences,
            evidence: extraction.evidence,
        })
    }
}

/// How a paper's genes are scored.
#[derive(Debug)]
pub enum Scorer {
    /// Normalized occurrence counts with optional evidence.
    Dictionary(DictionaryScorer),
    /// Sequence-classifier probability per gene.
    Model(Rescorer),
}

impl Scorer {
    /// Pick the strategy from `config.model.enabled`. The model variant
    /// starts uninitialized; install a classifier before scoring.
    pub fn from_config(config: &FinderConfig) -> Result<Self, ConfigError> {
        if config.model.effective_enabled() {
            return Ok(Self::Model(Rescorer::new(
                config.model.effective_positive_label(),
            )));
        }
        Ok(Self::Dictionary(DictionaryScorer::new(
            ExtractOptions::from_config(&config.output)?,
            MetricFlags::from_config(&config.output),
        )))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dictionary(_) => "dictionary",
            Self::Model(_) => "model",
        }
    }

    pub fn score(
        &self,
        paper: &Paper,
        dictionary: &GeneDictionary,
        exceptions: &ExceptionSet,
    ) -> Result<DocumentReport, PipelineError> {
        match self {
            Self::Dictionary(scorer) => scorer.score(paper, dictionary, exceptions),
            Self::Model(rescorer) => {
                // Only the candidate list is needed; skip evidence construction.
                let options = ExtractOptions::new(SnippetMode::None, false);
                let extraction = extract(paper.document(), dictionary, exceptions, &options);
                let abstract_text = paper.document().abstract_text();
                debug!(
                    paper = paper.id(),
                    candidates = extraction.candidates.len(),
                    "rescoring paper"
                );
                let probabilities = rescorer.score_paper(&extraction, dictionary, &abstract_text)?;
                Ok(DocumentReport::Probabilities(probabilities))
            }
        }
    }
}
