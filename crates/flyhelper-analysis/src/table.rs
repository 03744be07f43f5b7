//! Insertion-ordered per-gene table.

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, Serializer};

/// Values keyed by gene identifier, iterated in first-insertion order.
///
/// Genes appear in the order their first accepted mention was seen, which
/// keeps repeated runs over the same paper identical.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneTable<T> {
    entries: Vec<(String, T)>,
    index: FxHashMap<String, usize>,
}

impl<T> Default for GeneTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T> GeneTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, gene_id: &str) -> bool {
        self.index.contains_key(gene_id)
    }

    pub fn get(&self, gene_id: &str) -> Option<&T> {
        self.index.get(gene_id).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, gene_id: &str) -> Option<&mut T> {
        match self.index.get(gene_id) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Value for `gene_id`, inserting `make()` at the end if absent.
    pub fn get_or_insert_with(&mut self, gene_id: &str, make: impl FnOnce() -> T) -> &mut T {
        let i = match self.index.get(gene_id) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries.push((gene_id.to_string(), make()));
                self.index.insert(gene_id.to_string(), i);
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Insert or replace. Replacing keeps the original position.
    pub fn insert(&mut self, gene_id: impl Into<String>, value: T) {
        let gene_id = gene_id.into();
        match self.index.get(&gene_id) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(gene_id.clone(), self.entries.len());
                self.entries.push((gene_id, value));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn genes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<T> IntoIterator for GeneTable<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T> FromIterator<(String, T)> for GeneTable<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (gene_id, value) in iter {
            table.insert(gene_id, value);
        }
        table
    }
}

impl<T: Serialize> Serialize for GeneTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
