//! Tree traversals and invariant checking

use super::node::{EMPTY_HEIGHT, Link, Node};
use std::collections::VecDeque;
use std::fmt;

/// In-order iterator over keys
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<K>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

/// Breadth-first iterator over keys
///
/// Yields every key at depth `d` before any key at depth `d + 1`, left to
/// right within a level.
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: &'a Link<K>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(node) = root {
            queue.push_back(&**node);
        }
        Self { queue }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = &node.left {
            self.queue.push_back(left);
        }
        if let Some(right) = &node.right {
            self.queue.push_back(right);
        }
        Some(&node.key)
    }
}

/// A broken tree invariant, as found by `validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The in-order key at `position` is smaller than its predecessor
    OutOfOrder { position: usize },
    /// A node at `depth` caches a height different from its children's
    StaleHeight {
        depth: usize,
        cached: i32,
        expected: i32,
    },
    /// A node at `depth` has a balance factor outside `-1..=1`
    Unbalanced { depth: usize, balance: i32 },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { position } => {
                write!(f, "key at in-order position {position} is out of order")
            }
            Self::StaleHeight {
                depth,
                cached,
                expected,
            } => write!(
                f,
                "node at depth {depth} caches height {cached}, expected {expected}"
            ),
            Self::Unbalanced { depth, balance } => {
                write!(f, "node at depth {depth} has balance factor {balance}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

pub(crate) fn validate<K: Ord>(
    root: &Link<K>,
    check_balance: bool,
) -> Result<(), InvariantViolation> {
    check_shape(root, check_balance, 0)?;

    let mut previous: Option<&K> = None;
    for (position, key) in Iter::new(root).enumerate() {
        if previous.is_some_and(|prev| prev > key) {
            return Err(InvariantViolation::OutOfOrder { position });
        }
        previous = Some(key);
    }
    Ok(())
}

/// Recompute heights from scratch, comparing against the cached ones
fn check_shape<K>(
    link: &Link<K>,
    check_balance: bool,
    depth: usize,
) -> Result<i32, InvariantViolation> {
    let Some(node) = link else {
        return Ok(EMPTY_HEIGHT);
    };

    let left = check_shape(&node.left, check_balance, depth + 1)?;
    let right = check_shape(&node.right, check_balance, depth + 1)?;
    let expected = 1 + left.max(right);

    if node.height != expected {
        return Err(InvariantViolation::StaleHeight {
            depth,
            cached: node.height,
            expected,
        });
    }
    if check_balance && (right - left).abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            depth,
            balance: right - left,
        });
    }
    Ok(expected)
}

/// Upper bound on the height of an AVL tree holding `len` keys
///
/// `1.44 * log2(len + 2) - 1`
#[must_use]
pub fn avl_height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2() - 1.0
}
