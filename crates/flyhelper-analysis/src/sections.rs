//! Relevant-section heuristic.
//!
//! A span counts when it sits inside `body` and outside the body's first
//! child section, which stands in for the introduction.

use flyhelper_core::constants::{BODY_TAG, SECTION_TAG};

use crate::document::{Document, NodeId};

/// Whether `node` lies in a relevant region of `document`.
///
/// Walks from `node` toward the root. Every `sec` passed on the way
/// overwrites the tracked section, so the section compared against the
/// body's first child is the outermost one below `body`. Without a `body`
/// ancestor the answer is always false; inside `body` but outside any `sec`
/// it is true.
pub fn is_in_relevant_section(node: NodeId, document: &Document) -> bool {
    let mut section = None;

    for id in std::iter::once(node).chain(document.ancestors(node)) {
        match document.node(id).tag() {
            BODY_TAG => {
                return match section {
                    Some(section) => document.children(id).first() != Some(&section),
                    None => true,
                };
            }
            SECTION_TAG => section = Some(id),
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn italic_relevance(xml: &str) -> Vec<bool> {
        let doc = Document::parse(xml).unwrap();
        doc.iter_tag("italic")
            .map(|id| is_in_relevant_section(id, &doc))
            .collect()
    }

    #[test]
    fn test_first_section_excluded() {
        let xml = "<article><body><sec><italic>a</italic></sec><sec><italic>b</italic></sec></body></article>";
        assert_eq!(italic_relevance(xml), vec![false, true]);
    }

    #[test]
    fn test_no_body_never_relevant() {
        let xml = "<article><front><italic>a</italic></front><back><sec><italic>b</italic></sec></back></article>";
        assert_eq!(italic_relevance(xml), vec![false, false]);
    }

    #[test]
    fn test_directly_under_body_relevant() {
        let xml = "<article><body><p><italic>a</italic></p></body></article>";
        assert_eq!(italic_relevance(xml), vec![true]);
    }

    #[test]
    fn test_body_paragraph_before_sections_makes_first_sec_relevant() {
        // The first child of body is a <p>, so no section is the "introduction".
        let xml = "<article><body><p>lead</p><sec><italic>a</italic></sec></body></article>";
        assert_eq!(italic_relevance(xml), vec![true]);
    }

    #[test]
    fn test_subsection_of_introduction_excluded() {
        let xml = "<article><body><sec><sec><italic>a</italic></sec></sec><sec><sec><italic>b</italic></sec></sec></body></article>";
        assert_eq!(italic_relevance(xml), vec![false, true]);
    }

    #[test]
    fn test_body_as_root() {
        let xml = "<body><sec><italic>a</italic></sec><sec><italic>b</italic></sec></body>";
        assert_eq!(italic_relevance(xml), vec![false, true]);
    }

    #[test]
    fn test_sections_above_body_ignored() {
        let xml = "<article><sec><body><sec><p>intro</p></sec><sec><italic>a</italic></sec></body></sec></article>";
        assert_eq!(italic_relevance(xml), vec![true]);
    }

    #[test]
    fn test_walk_follows_ancestor_chain() {
        let doc = Document::parse("<article><body><sec><p><italic>a</italic></p></sec></body></article>").unwrap();
        let italic = doc.find_first("italic").unwrap();
        let tags: Vec<&str> = doc.ancestors(italic).map(|id| doc.node(id).tag()).collect();
        assert_eq!(tags, vec!["p", "sec", "body", "article"]);
        assert!(!is_in_relevant_section(italic, &doc));
    }
}
