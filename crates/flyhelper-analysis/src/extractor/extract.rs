//! The extraction pass.

use tracing::debug;

use flyhelper_core::constants::{ITALIC_TAG, MIN_CANDIDATE_CHARS};

use super::types::{Candidate, ExtractOptions, Extraction};
use crate::dictionary::GeneDictionary;
use crate::document::Document;
use crate::exceptions::{is_exception, ExceptionSet};
use crate::sections::is_in_relevant_section;
use crate::snippets::build_evidence;

/// Walk every italic span of `document` in document order.
///
/// A span's trimmed text becomes a candidate when it is a dictionary key,
/// longer than one character, and not an exception. Candidates in a
/// relevant section are then counted against their gene, contribute
/// evidence per `options`, and add to the document's relevant-mention total.
pub fn extract(
    document: &Document,
    dictionary: &GeneDictionary,
    exceptions: &ExceptionSet,
    options: &ExtractOptions,
) -> Extraction {
    let mut extraction = Extraction::default();

    for node in document.iter_tag(ITALIC_TAG) {
        let Some(text) = document.node(node).text().filter(|t| !t.is_empty()) else {
            continue;
        };
        let surface = text.trim();
        let Some(gene_id) = dictionary.gene_for(surface) else {
            continue;
        };
        if surface.chars().count() <= MIN_CANDIDATE_CHARS || is_exception(surface, exceptions) {
            continue;
        }

        extraction.candidates.push(Candidate {
            surface: surface.to_string(),
            node,
        });

        if !is_in_relevant_section(node, document) {
            continue;
        }

        let evidence = extraction.evidence.get_or_insert_with(gene_id, Vec::new);
        if let Some(item) = build_evidence(document, node, surface, options) {
            evidence.push(item);
        }
        *extraction.occurrences.get_or_insert_with(gene_id, || 0) += 1;
        extraction.total_relevant_mentions += 1;
    }

    debug!(
        candidates = extraction.candidates.len(),
        relevant = extraction.total_relevant_mentions,
        genes = extraction.occurrences.len(),
        "extraction pass complete"
    );
    extraction
}
