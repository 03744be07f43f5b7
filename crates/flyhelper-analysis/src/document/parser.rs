//! XML -> arena tree, using `quick-xml`'s pull reader.

use std::borrow::Cow;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use flyhelper_core::errors::DocumentError;

use super::tree::{Document, Node, NodeId};

/// Parse XML into a [`Document`].
///
/// Element names are matched by local name (namespace prefixes dropped).
/// Comments, processing instructions, and the doctype are skipped; text on
/// either side of a skipped item is concatenated.
pub(crate) fn parse_document(xml: &str) -> Result<Document, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut builder = TreeBuilder::default();

    loop {
        let event = reader.read_event().map_err(|e| DocumentError::Malformed {
            position: reader.error_position(),
            message: e.to_string(),
        })?;
        let position = reader.buffer_position();

        match event {
            Event::Start(e) => builder.open(local_name(&e), position)?,
            Event::Empty(e) => {
                builder.open(local_name(&e), position)?;
                builder.close();
            }
            Event::End(_) => builder.close(),
            Event::Text(e) => builder.text(&decode_text(&String::from_utf8_lossy(&e))),
            Event::CData(e) => builder.text(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            _ => {}
        }
    }

    builder.finish(reader.buffer_position())
}

/// Resolve character and predefined entity references one at a time.
/// A reference that cannot be resolved (an entity declared in an external
/// DTD such as `&ndash;`) is kept verbatim; its neighbours still decode.
fn decode_text(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let end = tail[1..]
            .find(|c: char| c == ';' || c == '&' || c.is_whitespace())
            .map(|i| i + 1)
            .filter(|&i| tail[i..].starts_with(';'));
        let Some(semi) = end else {
            // Bare ampersand.
            out.push('&');
            rest = &tail[1..];
            continue;
        };

        let reference = &tail[..=semi];
        match unescape(reference) {
            Ok(decoded) => out.push_str(&decoded),
            Err(err) => {
                debug!(reference, error = %err, "keeping unresolved entity reference");
                out.push_str(reference);
            }
        }
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    fn open(&mut self, tag: String, position: u64) -> Result<(), DocumentError> {
        let parent = self.stack.last().copied();
        if parent.is_none() && !self.nodes.is_empty() {
            return Err(DocumentError::Malformed {
                position,
                message: format!("second root element <{tag}>"),
            });
        }

        let id = NodeId(self.nodes.len() as u32);
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        self.nodes.push(Node::new(tag));
        self.parents.push(parent);
        self.stack.push(id);
        Ok(())
    }

    fn close(&mut self) {
        self.stack.pop();
    }

    /// Append character data to the open element's text, or to the tail of
    /// its most recent child. Data outside the root element is dropped.
    fn text(&mut self, data: &str) {
        if data.is_empty() {
            return;
        }
        let Some(&current) = self.stack.last() else {
            return;
        };
        let last_child = self.nodes[current.index()].children.last().copied();
        let slot = match last_child {
            Some(child) => &mut self.nodes[child.index()].tail,
            None => &mut self.nodes[current.index()].text,
        };
        match slot {
            Some(existing) => existing.push_str(data),
            None => *slot = Some(data.to_string()),
        }
    }

    fn finish(self, position: u64) -> Result<Document, DocumentError> {
        if self.nodes.is_empty() {
            return Err(DocumentError::Empty);
        }
        if let Some(&open) = self.stack.last() {
            return Err(DocumentError::Malformed {
                position,
                message: format!("unclosed element <{}>", self.nodes[open.index()].tag),
            });
        }
        Ok(Document::from_parts(self.nodes, self.parents))
    }
}
