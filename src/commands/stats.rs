//! Tree statistics command
//!
//! Summarises the shape of a loaded dictionary.

use crate::core::{InvariantViolation, RotationCounter, avl_height_bound};
use crate::dictionary::{Dictionary, LoadReport};

/// Shape summary of a dictionary's tree
pub struct TreeStats {
    pub words: usize,
    pub duplicates_skipped: usize,
    pub height: i32,
    pub height_bound: f64,
    pub root: Option<String>,
    /// Nodes per level, root level first
    pub level_widths: Vec<usize>,
    pub rotations: RotationCounter,
    pub violation: Option<InvariantViolation>,
}

impl TreeStats {
    /// Whether the tree is within the AVL height bound
    #[must_use]
    pub fn within_bound(&self) -> bool {
        f64::from(self.height) <= self.height_bound
    }
}

/// Collect statistics for a dictionary
///
/// `report` is the result of loading it, used to show skipped duplicates.
#[must_use]
pub fn collect_stats(dict: &Dictionary, report: &LoadReport) -> TreeStats {
    TreeStats {
        words: dict.len(),
        duplicates_skipped: report.duplicates,
        height: dict.height(),
        height_bound: avl_height_bound(dict.len()),
        root: dict.root().map(|node| node.key().clone()),
        level_widths: level_widths(dict),
        rotations: *dict.rotation_counts(),
        violation: dict.tree().validate().err(),
    }
}

fn level_widths(dict: &Dictionary) -> Vec<usize> {
    let mut widths = Vec::new();
    let mut level = Vec::from_iter(dict.root());
    while !level.is_empty() {
        widths.push(level.len());
        level = level
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_empty_dictionary() {
        let dict = Dictionary::new();
        let stats = collect_stats(&dict, &LoadReport::default());

        assert_eq!(stats.words, 0);
        assert_eq!(stats.height, -1);
        assert!(stats.root.is_none());
        assert!(stats.level_widths.is_empty());
        assert!(stats.violation.is_none());
        assert!(stats.within_bound());
    }

    #[test]
    fn stats_of_loaded_dictionary() {
        let (dict, report) = Dictionary::from_words(["a", "b", "c", "d", "e", "f", "g", "a"]);
        let stats = collect_stats(&dict, &report);

        assert_eq!(stats.words, 7);
        assert_eq!(stats.duplicates_skipped, 1);
        assert_eq!(stats.height, 2);
        assert_eq!(stats.root.as_deref(), Some("d"));
        assert_eq!(stats.level_widths, [1, 2, 4]);
        assert_eq!(stats.rotations.total(), 4);
        assert!(stats.violation.is_none());
        assert!(stats.within_bound());
    }
}
