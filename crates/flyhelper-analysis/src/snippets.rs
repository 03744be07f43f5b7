//! Evidence text for accepted occurrences.

use flyhelper_core::config::SnippetMode;
use flyhelper_core::constants::SHORT_SNIPPET_CHARS;

use crate::document::{Document, NodeId};
use crate::extractor::{Evidence, ExtractOptions};

/// Evidence for the span `node` whose trimmed text is `surface`, or `None`
/// when the options keep nothing (`none` without occurrence text).
pub fn build_evidence(
    document: &Document,
    node: NodeId,
    surface: &str,
    options: &ExtractOptions,
) -> Option<Evidence> {
    let occurrence = options.emit_occurrence_text;
    match options.snippet_mode {
        SnippetMode::None if occurrence => Some(Evidence::Occurrence(surface.to_string())),
        SnippetMode::None => None,
        SnippetMode::Short if occurrence => Some(Evidence::Pair {
            occurrence: surface.to_string(),
            snippet: short_snippet(document, node, surface),
        }),
        // Without occurrence text, a span with no trailing text yields an empty snippet.
        SnippetMode::Short => Some(Evidence::Snippet(match trailing_text(document, node) {
            Some(_) => short_snippet(document, node, surface),
            None => String::new(),
        })),
        SnippetMode::Long if occurrence => Some(Evidence::Pair {
            occurrence: surface.to_string(),
            snippet: long_snippet(document, node),
        }),
        SnippetMode::Long => Some(Evidence::Snippet(long_snippet(document, node))),
    }
}

/// `surface` followed by at most 100 characters of the span's tail.
pub fn short_snippet(document: &Document, node: NodeId, surface: &str) -> String {
    let mut snippet = surface.to_string();
    if let Some(tail) = trailing_text(document, node) {
        snippet.extend(tail.chars().take(SHORT_SNIPPET_CHARS));
    }
    snippet
}

/// All text fragments under the span's parent, joined by single spaces.
pub fn long_snippet(document: &Document, node: NodeId) -> String {
    match document.parent(node) {
        Some(parent) => document.text_fragments(parent).join(" "),
        None => String::new(),
    }
}

fn trailing_text(document: &Document, node: NodeId) -> Option<&str> {
    document.node(node).tail().filter(|t| !t.is_empty())
}
