//! Paper-level orchestration: one finder, many papers.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use smallvec::{smallvec, SmallVec};
use tracing::{info, warn};

use flyhelper_core::config::FinderConfig;
use flyhelper_core::errors::{ConfigError, ErrorCode, PipelineError, PipelineResult};

use crate::confidence::{ConfidenceMap, Score};
use crate::dictionary::GeneDictionary;
use crate::document::Paper;
use crate::exceptions::LazyExceptions;
use crate::extractor::Evidence;
use crate::scorer::Scorer;
use crate::table::GeneTable;

/// Result of scoring one paper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentReport {
    Confidence {
        confidences: ConfidenceMap,
        evidence: GeneTable<Vec<Evidence>>,
    },
    Probabilities(GeneTable<f64>),
}

/// One output row: `document, gene, [occurrence], [snippet], scores...`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub document_id: String,
    pub gene_id: String,
    pub occurrence: Option<String>,
    pub snippet: Option<String>,
    pub scores: SmallVec<[Score; 3]>,
}

impl DocumentReport {
    /// Flatten into rows. A gene with evidence yields one row per evidence
    /// entry, all sharing the gene's scores; a gene without evidence yields
    /// a single row.
    pub fn rows(&self, document_id: &str) -> Vec<ReportRow> {
        let mut rows = Vec::new();
        match self {
            Self::Probabilities(probabilities) => {
                for (gene_id, &p) in probabilities.iter() {
                    rows.push(ReportRow {
                        document_id: document_id.to_string(),
                        gene_id: gene_id.to_string(),
                        occurrence: None,
                        snippet: None,
                        scores: smallvec![Score::Ratio(p)],
                    });
                }
            }
            Self::Confidence {
                confidences,
                evidence,
            } => {
                for (gene_id, record) in confidences.iter() {
                    let scores = record.scores();
                    let items = evidence.get(gene_id).map(Vec::as_slice).unwrap_or_default();
                    if items.is_empty() {
                        rows.push(ReportRow {
                            document_id: document_id.to_string(),
                            gene_id: gene_id.to_string(),
                            occurrence: None,
                            snippet: None,
                            scores: scores.clone(),
                        });
                    }
                    for item in items {
                        rows.push(ReportRow {
                            document_id: document_id.to_string(),
                            gene_id: gene_id.to_string(),
                            occurrence: item.occurrence().map(str::to_string),
                            snippet: item.snippet().map(str::to_string),
                            scores: scores.clone(),
                        });
                    }
                }
            }
        }
        rows
    }

    /// Number of genes reported.
    pub fn gene_count(&self) -> usize {
        match self {
            Self::Confidence { confidences, .. } => confidences.len(),
            Self::Probabilities(p) => p.len(),
        }
    }
}

/// Owns the shared, read-only resources of a run and scores papers with them.
#[derive(Debug)]
pub struct GeneFinder {
    dictionary: GeneDictionary,
    exceptions: LazyExceptions,
    scorer: Scorer,
}

impl GeneFinder {
    pub fn new(dictionary: GeneDictionary, exceptions: LazyExceptions, scorer: Scorer) -> Self {
        Self {
            dictionary,
            exceptions,
            scorer,
        }
    }

    /// Scorer and exception source from configuration; the exception list
    /// itself is read on first use.
    pub fn from_config(config: &FinderConfig, dictionary: GeneDictionary) -> Result<Self, ConfigError> {
        let exceptions = LazyExceptions::new(
            config.paths.effective_exceptions(),
            config.matching.effective_boundary_rule()?,
        );
        Ok(Self::new(dictionary, exceptions, Scorer::from_config(config)?))
    }

    /// Like [`GeneFinder::from_config`], reading the gene dictionary from
    /// `paths.gene_dictionary`.
    pub fn load(config: &FinderConfig) -> Result<Self, PipelineError> {
        let path = config.paths.effective_gene_dictionary();
        let dictionary = GeneDictionary::from_json_file(&path)?;
        info!(path = %path.display(), surface_forms = dictionary.len(), "loaded gene dictionary");
        Ok(Self::from_config(config, dictionary)?)
    }

    pub fn dictionary(&self) -> &GeneDictionary {
        &self.dictionary
    }

    pub fn exceptions(&self) -> &LazyExceptions {
        &self.exceptions
    }

    /// The scoring strategy; install the classifier through it in model mode.
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Score one parsed paper.
    pub fn analyze(&self, paper: &Paper) -> Result<DocumentReport, PipelineError> {
        let exceptions = self.exceptions.get()?;
        self.scorer.score(paper, &self.dictionary, exceptions)
    }

    /// Read, parse, and score one paper file. Returns the paper id with the report.
    pub fn analyze_path(&self, path: &Path) -> Result<(String, DocumentReport), PipelineError> {
        let paper = Paper::from_path(path)?;
        let report = self.analyze(&paper)?;
        Ok((paper.id().to_string(), report))
    }

    /// Score many paper files in parallel.
    ///
    /// The exception list is loaded before fanning out. A paper that fails
    /// is logged and recorded in `errors`; the others still complete and
    /// keep their input order in `data`.
    pub fn analyze_batch(&self, paths: &[PathBuf]) -> PipelineResult<Vec<(String, DocumentReport)>> {
        let mut result = PipelineResult::default();

        if let Err(e) = self.exceptions.get() {
            warn!(error = %e.tagged(), "exception list unavailable, no paper scored");
            result.add_error(self.exceptions.path().display().to_string(), e.into());
            return result;
        }

        let outcomes: Vec<Result<(String, DocumentReport), PipelineError>> =
            paths.par_iter().map(|path| self.analyze_path(path)).collect();

        for (path, outcome) in paths.iter().zip(outcomes) {
            match outcome {
                Ok(entry) => result.data.push(entry),
                Err(e) => {
                    let id = document_id(path);
                    warn!(paper = %id, error = %e.tagged(), "paper failed");
                    result.add_error(id, e);
                }
            }
        }

        info!(
            scorer = self.scorer.name(),
            papers = paths.len(),
            scored = result.data.len(),
            failed = result.error_count(),
            "batch complete"
        );
        result
    }
}

fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
