//! Confidence metrics from occurrence counts.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use flyhelper_core::config::OutputConfig;
use flyhelper_core::constants::{METRIC_GENES, METRIC_WORD};
use flyhelper_core::errors::ConfidenceError;

use crate::table::GeneTable;

/// Which metrics to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricFlags {
    /// Occurrences / all relevant gene mentions in the document.
    pub gene_frequency: bool,
    /// Occurrences / whitespace-delimited words in the raw document.
    pub word_frequency: bool,
    /// Occurrences, unnormalized.
    pub raw_occurrence: bool,
}

impl MetricFlags {
    pub fn all() -> Self {
        Self {
            gene_frequency: true,
            word_frequency: true,
            raw_occurrence: true,
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self {
            gene_frequency: output.effective_gene_frequency(),
            word_frequency: output.effective_word_frequency(),
            raw_occurrence: output.effective_raw_occurrence(),
        }
    }
}

/// One reported score. Raw counts stay integers in output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    Ratio(f64),
    Count(usize),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(r) => write!(f, "{r}"),
            Self::Count(c) => write!(f, "{c}"),
        }
    }
}

/// Scores for one gene. A metric is `Some` only when enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfidenceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<usize>,
}

impl ConfidenceRecord {
    /// Enabled scores in output order: genes, word, raw.
    pub fn scores(&self) -> SmallVec<[Score; 3]> {
        let mut scores = SmallVec::new();
        scores.extend(self.genes.map(Score::Ratio));
        scores.extend(self.word.map(Score::Ratio));
        scores.extend(self.raw.map(Score::Count));
        scores
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_none() && self.word.is_none() && self.raw.is_none()
    }
}

pub type ConfidenceMap = GeneTable<ConfidenceRecord>;

/// Turn per-gene occurrence counts into confidence records.
///
/// Every gene in `occurrences` is listed, even with no metric enabled.
/// A normalized metric whose denominator is zero fails with
/// [`ConfidenceError::ZeroDenominator`] instead of producing NaN or infinity;
/// with no genes at all the result is simply empty.
pub fn aggregate(
    occurrences: &GeneTable<usize>,
    total_relevant_mentions: usize,
    document_word_count: usize,
    flags: MetricFlags,
) -> Result<ConfidenceMap, ConfidenceError> {
    if !occurrences.is_empty() {
        if flags.gene_frequency && total_relevant_mentions == 0 {
            return Err(ConfidenceError::ZeroDenominator {
                metric: METRIC_GENES,
                genes: occurrences.len(),
            });
        }
        if flags.word_frequency && document_word_count == 0 {
            return Err(ConfidenceError::ZeroDenominator {
                metric: METRIC_WORD,
                genes: occurrences.len(),
            });
        }
    }

    Ok(occurrences
        .iter()
        .map(|(gene_id, &count)| {
            let record = ConfidenceRecord {
                genes: flags
                    .gene_frequency
                    .then(|| count as f64 / total_relevant_mentions as f64),
                word: flags
                    .word_frequency
                    .then(|| count as f64 / document_word_count as f64),
                raw: flags.raw_occurrence.then_some(count),
            };
            (gene_id.to_string(), record)
        })
        .collect())
}
