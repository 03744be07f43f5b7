//! Article document model.
//!
//! Nodes live in an arena in document order and are addressed by [`NodeId`];
//! every node records its parent index, so ancestor walks are O(depth).

mod paper;
mod parser;
mod tree;

pub use paper::Paper;
pub use tree::{Ancestors, Document, Node, NodeId};
