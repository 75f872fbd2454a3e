//! Formatting utilities for terminal output

use crate::core::NodeRef;
use std::fmt::Display;

/// Join similar words the way the menu prints them
#[must_use]
pub fn format_word_list(words: &[String]) -> String {
    if words.is_empty() {
        "(none)".to_string()
    } else {
        words.join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the top `max_depth` levels of a tree as an indented outline
///
/// Each line shows the key, its cached height and its balance factor. Left
/// children are marked `L`, right children `R`. Subtrees below the depth
/// limit are summarised with an ellipsis.
#[must_use]
pub fn tree_outline<K: Display>(root: Option<NodeRef<'_, K>>, max_depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(node) = root {
        push_outline(&mut lines, node, "", "", max_depth);
    }
    lines
}

fn push_outline<K: Display>(
    lines: &mut Vec<String>,
    node: NodeRef<'_, K>,
    indent: &str,
    label: &str,
    depth_left: usize,
) {
    lines.push(format!(
        "{indent}{label}{} (h={}, bf={:+})",
        node.key(),
        node.height(),
        node.balance_factor()
    ));

    if node.is_leaf() {
        return;
    }
    let child_indent = format!("{indent}  ");
    if depth_left == 0 {
        lines.push(format!("{child_indent}…"));
        return;
    }
    for (child, tag) in [(node.left(), "L: "), (node.right(), "R: ")] {
        match child {
            Some(child) => push_outline(lines, child, &child_indent, tag, depth_left - 1),
            None => lines.push(format!("{child_indent}{tag}-")),
        }
    }
}
