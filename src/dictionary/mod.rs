//! Word dictionary
//!
//! [`Dictionary`] wraps a [`BalancedTree`] of words with set semantics: it
//! refuses duplicates, reports absent words, and handles bulk loading and
//! level-order saving of word-list files.

mod error;
mod similar;

pub use error::DictionaryError;
pub use similar::ALPHABET;

use crate::core::{BalancedTree, EventLog, LevelOrder, NodeRef, RebalanceRecord, RotationCounter};
use crate::wordlists::loader;
use std::path::Path;
use tracing::info;

/// Result of [`Dictionary::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    AlreadyPresent,
}

/// Result of [`Dictionary::remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
    /// Nothing to remove from
    EmptyDictionary,
}

/// Counts from a bulk load
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub duplicates: usize,
}

impl LoadReport {
    /// Words seen, duplicates included
    #[must_use]
    pub const fn total(&self) -> usize {
        self.inserted + self.duplicates
    }
}

/// A set of words kept in an AVL tree
///
/// # Examples
/// ```
/// use avl_dictionary::dictionary::{AddOutcome, Dictionary, RemoveOutcome};
///
/// let mut dict = Dictionary::new();
/// assert_eq!(dict.add("cat"), AddOutcome::Inserted);
/// assert_eq!(dict.add("cat"), AddOutcome::AlreadyPresent);
/// assert!(dict.contains("cat"));
/// assert_eq!(dict.remove("dog"), RemoveOutcome::NotFound);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tree: BalancedTree<String, EventLog>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words, ignoring duplicates
    pub fn from_words<I, S>(words: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        let report = dict.bulk_load(words);
        (dict, report)
    }

    /// Load a word-list file: one word per line, trimmed, blanks skipped
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, LoadReport), DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (dict, report) = Self::from_words(words);
        info!(
            path = %path.display(),
            inserted = report.inserted,
            duplicates = report.duplicates,
            "loaded word list"
        );
        Ok((dict, report))
    }

    /// Add a word unless it is already present
    pub fn add(&mut self, word: impl Into<String>) -> AddOutcome {
        let word = word.into();
        if self.tree.contains(word.as_str()) {
            return AddOutcome::AlreadyPresent;
        }
        self.tree.insert(word);
        AddOutcome::Inserted
    }

    /// Remove a word
    pub fn remove(&mut self, word: &str) -> RemoveOutcome {
        if self.tree.is_empty() {
            RemoveOutcome::EmptyDictionary
        } else if self.tree.delete(word) {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    /// Add every word, counting the ones already present
    pub fn bulk_load<I, S>(&mut self, words: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut report = LoadReport::default();
        for word in words {
            match self.add(word) {
                AddOutcome::Inserted => report.inserted += 1,
                AddOutcome::AlreadyPresent => report.duplicates += 1,
            }
        }
        report
    }

    /// Words breadth-first, in the order they are saved
    pub fn level_order(&self) -> impl Iterator<Item = &str> {
        let words: LevelOrder<'_, String> = self.tree.level_order();
        words.map(String::as_str)
    }

    /// Words in ascending order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tree.iter().map(String::as_str)
    }

    /// Write the dictionary to `path` in level order, one word per line
    ///
    /// Returns the number of words written.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        let count = loader::save_to_file(path, self.level_order()).map_err(|source| {
            DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), words = count, "saved word list");
        Ok(count)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Tree height, `-1` when empty
    #[must_use]
    pub fn height(&self) -> i32 {
        self.tree.height()
    }

    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, String>> {
        self.tree.root()
    }

    /// Read access to the underlying tree
    #[must_use]
    pub const fn tree(&self) -> &BalancedTree<String, EventLog> {
        &self.tree
    }

    /// Rebalances since the last drain, oldest first
    pub fn drain_rebalances(&mut self) -> Vec<RebalanceRecord> {
        self.tree.observer_mut().drain()
    }

    /// Rebalances per case since creation or the last reset
    #[must_use]
    pub const fn rotation_counts(&self) -> &RotationCounter {
        self.tree.observer().counter()
    }

    pub fn reset_rotation_counts(&mut self) {
        self.tree.observer_mut().reset_counts();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicates() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.add("apple"), AddOutcome::Inserted);
        assert_eq!(dict.add("apple".to_string()), AddOutcome::AlreadyPresent);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn remove_outcomes() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.remove("apple"), RemoveOutcome::EmptyDictionary);

        dict.add("apple");
        assert_eq!(dict.remove("pear"), RemoveOutcome::NotFound);
        assert_eq!(dict.remove("apple"), RemoveOutcome::Removed);
        assert!(dict.is_empty());
    }

    #[test]
    fn bulk_load_counts_duplicates() {
        let (dict, report) = Dictionary::from_words(["cat", "dog", "cat", "emu", "dog"]);
        assert_eq!(report.inserted, 3);
        assert_eq!(report.duplicates, 2);
        assert_eq!(report.total(), 5);
        assert_eq!(dict.words().collect::<Vec<_>>(), ["cat", "dog", "emu"]);
    }

    #[test]
    fn level_order_starts_at_root() {
        let (dict, _) = Dictionary::from_words(["b", "a", "c", "d"]);
        let order: Vec<&str> = dict.level_order().collect();
        assert_eq!(order, ["b", "a", "c", "d"]);
        assert_eq!(dict.root().map(|r| r.key().as_str()), Some("b"));
    }

    #[test]
    fn rebalances_are_reported() {
        let mut dict = Dictionary::new();
        for word in ["c", "b", "a"] {
            dict.add(word);
        }
        let records = dict.drain_rebalances();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "c");
        assert!(dict.drain_rebalances().is_empty());
        assert_eq!(dict.rotation_counts().total(), 1);

        dict.reset_rotation_counts();
        assert_eq!(dict.rotation_counts().total(), 0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = Dictionary::load("definitely/not/here.txt");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }
}
