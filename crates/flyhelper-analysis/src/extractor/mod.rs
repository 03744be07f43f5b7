//! Candidate extraction: one pass over a document's italic spans.

mod extract;
mod types;

pub use extract::extract;
pub use types::{Candidate, Evidence, ExtractOptions, Extraction, FormCount};
