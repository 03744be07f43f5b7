//! Extraction inputs and outputs.

use serde::Serialize;

use flyhelper_core::config::{OutputConfig, SnippetMode};
use flyhelper_core::errors::ConfigError;

use crate::dictionary::GeneDictionary;
use crate::document::NodeId;
use crate::table::GeneTable;

/// What evidence the extractor keeps per accepted occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    pub snippet_mode: SnippetMode,
    /// Keep the exact surface form of each occurrence.
    pub emit_occurrence_text: bool,
}

impl ExtractOptions {
    pub fn new(snippet_mode: SnippetMode, emit_occurrence_text: bool) -> Self {
        Self {
            snippet_mode,
            emit_occurrence_text,
        }
    }

    /// Build from a raw `snippet_type` string. Anything other than
    /// `long`, `short`, or `none` is a configuration error.
    pub fn parse(snippet_type: &str, emit_occurrence_text: bool) -> Result<Self, ConfigError> {
        Ok(Self::new(snippet_type.parse()?, emit_occurrence_text))
    }

    pub fn from_config(output: &OutputConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            output.effective_snippet_mode()?,
            output.effective_gene_occurrence(),
        ))
    }
}

/// An accepted dictionary hit, before the section check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub surface: String,
    pub node: NodeId,
}

/// Supporting evidence for one relevant occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Evidence {
    /// Surface form only.
    Occurrence(String),
    /// Snippet only.
    Snippet(String),
    /// Surface form with its snippet.
    Pair { occurrence: String, snippet: String },
}

impl Evidence {
    pub fn occurrence(&self) -> Option<&str> {
        match self {
            Self::Occurrence(o) | Self::Pair { occurrence: o, .. } => Some(o),
            Self::Snippet(_) => None,
        }
    }

    pub fn snippet(&self) -> Option<&str> {
        match self {
            Self::Snippet(s) | Self::Pair { snippet: s, .. } => Some(s),
            Self::Occurrence(_) => None,
        }
    }
}

/// A distinct surface form and how often it was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormCount {
    pub form: String,
    pub count: usize,
}

/// Everything one extraction pass produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    /// Relevant-section occurrences per gene.
    pub occurrences: GeneTable<usize>,
    /// Evidence per gene, in document order. Every gene with a relevant
    /// occurrence has an entry, possibly empty.
    pub evidence: GeneTable<Vec<Evidence>>,
    /// Sum of all relevant occurrences.
    pub total_relevant_mentions: usize,
    /// Every accepted candidate in document order, regardless of section.
    pub candidates: Vec<Candidate>,
}

impl Extraction {
    /// Distinct surface forms per gene with their counts, over the whole
    /// document (introduction and non-body regions included).
    /// Forms keep first-seen order.
    pub fn candidate_summary(&self, dictionary: &GeneDictionary) -> GeneTable<Vec<FormCount>> {
        let mut summary: GeneTable<Vec<FormCount>> = GeneTable::new();
        for candidate in &self.candidates {
            let Some(gene_id) = dictionary.gene_for(&candidate.surface) else {
                continue;
            };
            let forms = summary.get_or_insert_with(gene_id, Vec::new);
            match forms.iter_mut().find(|f| f.form == candidate.surface) {
                Some(existing) => existing.count += 1,
                None => forms.push(FormCount {
                    form: candidate.surface.clone(),
                    count: 1,
                }),
            }
        }
        summary
    }
}
