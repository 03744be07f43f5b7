//! Arena tree with ElementTree-style `text` / `tail` fields.

use serde::Serialize;
use smallvec::SmallVec;

use flyhelper_core::constants::ABSTRACT_TAG;
use flyhelper_core::errors::DocumentError;

use super::parser;

/// Index of a node in a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A labeled element.
///
/// `text` is the character data before the first child; `tail` is the
/// character data after this element's end tag, up to the next sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) tag: String,
    pub(crate) text: Option<String>,
    pub(crate) tail: Option<String>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn new(tag: String) -> Self {
        Self {
            tag,
            text: None,
            tail: None,
            children: SmallVec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A parsed article. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
}

impl Document {
    /// Parse article XML into an arena tree.
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        parser::parse_document(xml)
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, parents: Vec<Option<NodeId>>) -> Self {
        debug_assert_eq!(nodes.len(), parents.len());
        Self { nodes, parents }
    }

    /// The root element. Parsing guarantees at least one node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            document: self,
            next: self.parent(id),
        }
    }

    /// All nodes in document (pre-)order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Nodes with the given tag, in document order.
    pub fn iter_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.iter().filter(move |&id| self.node(id).tag == tag)
    }

    /// First node with the given tag, in document order.
    pub fn find_first(&self, tag: &str) -> Option<NodeId> {
        self.iter_tag(tag).next()
    }

    /// Non-empty text fragments inside `id` in document order: its own text,
    /// then each child's fragments followed by that child's tail.
    /// The tail of `id` itself is not included.
    pub fn text_fragments(&self, id: NodeId) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text<'a>(&'a self, id: NodeId, out: &mut Vec<&'a str>) {
        let node = self.node(id);
        if let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) {
            out.push(text);
        }
        for &child in &node.children {
            self.collect_text(child, out);
            if let Some(tail) = self.node(child).tail.as_deref().filter(|t| !t.is_empty()) {
                out.push(tail);
            }
        }
    }

    /// Whitespace-normalized text of the first `abstract` element, or an
    /// empty string when the article has none.
    pub fn abstract_text(&self) -> String {
        match self.find_first(ABSTRACT_TAG) {
            Some(id) => {
                let joined = self.text_fragments(id).join(" ");
                joined.split_whitespace().collect::<Vec<_>>().join(" ")
            }
            None => String::new(),
        }
    }
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.document.parent(current);
        Some(current)
    }
}
