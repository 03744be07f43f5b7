//! False-positive exception matching.
//!
//! An exception rejects a candidate when it occurs inside the candidate and
//! both ends of that occurrence sit on a non-alphanumeric boundary (or the
//! candidate's start/end). Only the first occurrence of each exception is
//! inspected.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use tracing::info;

use flyhelper_core::config::BoundaryRule;
use flyhelper_core::errors::ExceptionError;

/// Strings that must never be treated as gene mentions.
#[derive(Debug, Clone, Default)]
pub struct ExceptionSet {
    entries: FxHashSet<String>,
    rule: BoundaryRule,
}

impl ExceptionSet {
    pub fn new(rule: BoundaryRule) -> Self {
        Self {
            entries: FxHashSet::default(),
            rule,
        }
    }

    /// Build from in-memory entries. Entries are trimmed; blank ones dropped.
    pub fn from_entries<I, S>(entries: I, rule: BoundaryRule) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(rule);
        for entry in entries {
            set.insert(entry.as_ref());
        }
        set
    }

    /// Read a newline-delimited exception file.
    pub fn load(path: &Path, rule: BoundaryRule) -> Result<Self, ExceptionError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ExceptionError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ExceptionError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let set = Self::from_entries(content.lines(), rule);
        info!(path = %path.display(), entries = set.len(), rule = %rule, "loaded exception list");
        Ok(set)
    }

    pub fn insert(&mut self, entry: &str) {
        let entry = entry.trim();
        if !entry.is_empty() {
            self.entries.insert(entry.to_string());
        }
    }

    pub fn rule(&self) -> BoundaryRule {
        self.rule
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Whether any exception in `exceptions` matches `candidate`.
pub fn is_exception(candidate: &str, exceptions: &ExceptionSet) -> bool {
    exceptions
        .iter()
        .any(|exception| matches_exception(candidate, exception, exceptions.rule()))
}

/// Whether the first occurrence of `exception` in `candidate` is bounded by
/// non-alphanumeric characters (or the candidate's edges) on both sides.
pub fn matches_exception(candidate: &str, exception: &str, rule: BoundaryRule) -> bool {
    let Some(start) = candidate.find(exception) else {
        return false;
    };
    let before = candidate[..start].chars().next_back();
    let rest = &candidate[start + exception.len()..];

    let start_anchored = before.map_or(true, |c| !c.is_alphanumeric());
    start_anchored && end_anchored(rest, rule)
}

/// `rest` is the part of the candidate after the match.
fn end_anchored(rest: &str, rule: BoundaryRule) -> bool {
    let mut chars = rest.chars();
    let Some(next) = chars.next() else {
        return true;
    };
    match rule {
        BoundaryRule::Strict => !next.is_alphanumeric(),
        // A match ending on the second-to-last character is end-anchored.
        BoundaryRule::Legacy => chars.next().is_none() || !next.is_alphanumeric(),
    }
}

/// Exception list loaded on first use and cached for the owner's lifetime.
///
/// Concurrent first calls are safe: at most one loaded set is kept and every
/// caller sees the same value afterwards.
#[derive(Debug)]
pub struct LazyExceptions {
    path: PathBuf,
    rule: BoundaryRule,
    cell: OnceLock<ExceptionSet>,
}

impl LazyExceptions {
    pub fn new(path: impl Into<PathBuf>, rule: BoundaryRule) -> Self {
        Self {
            path: path.into(),
            rule,
            cell: OnceLock::new(),
        }
    }

    /// Wrap an already-built set; `get` never touches the filesystem.
    pub fn preloaded(set: ExceptionSet) -> Self {
        let cell = OnceLock::new();
        let rule = set.rule();
        let _ = cell.set(set);
        Self {
            path: PathBuf::new(),
            rule,
            cell,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The exception set, loading it on the first call.
    /// A missing file is an error every time until it appears.
    pub fn get(&self) -> Result<&ExceptionSet, ExceptionError> {
        if let Some(set) = self.cell.get() {
            return Ok(set);
        }
        let loaded = ExceptionSet::load(&self.path, self.rule)?;
        Ok(self.cell.get_or_init(|| loaded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(candidate: &str, exception: &str) -> bool {
        matches_exception(candidate, exception, BoundaryRule::Legacy)
    }

    fn strict(candidate: &str, exception: &str) -> bool {
        matches_exception(candidate, exception, BoundaryRule::Strict)
    }

    #[test]
    fn test_exact_match_rejected_under_both_rules() {
        assert!(legacy("gene", "gene"));
        assert!(strict("gene", "gene"));
    }

    #[test]
    fn test_punctuation_boundaries() {
        assert!(legacy("ABC-gene-XYZ", "gene"));
        assert!(strict("ABC gene/XYZ", "gene"));
    }

    #[test]
    fn test_alphanumeric_neighbors_block_match() {
        assert!(!legacy("ABCgeneXYZ", "gene"));
        assert!(!legacy("ABCgenesXYZ", "gene"));
        assert!(!legacy("x-genesXYZ", "gene"));
    }

    #[test]
    fn test_penultimate_end_differs_between_rules() {
        // Match ends one character before the end of the candidate.
        assert!(legacy("genes", "gene"));
        assert!(!strict("genes", "gene"));
    }

    #[test]
    fn test_only_first_occurrence_inspected() {
        // First "ab" is glued to "x"; the second would be bounded but is not checked.
        assert!(!strict("xab ab", "ab"));
    }

    #[test]
    fn test_absent_exception() {
        assert!(!legacy("white", "gene"));
    }

    #[test]
    fn test_blank_entries_dropped() {
        let set = ExceptionSet::from_entries(["  ", "wing ", ""], BoundaryRule::Legacy);
        assert_eq!(set.len(), 1);
        assert!(set.contains("wing"));
    }
}
