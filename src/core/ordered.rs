//! Unbalanced binary search tree
//!
//! [`OrderedTree`] keeps keys in sort order and nothing more. Its structural
//! primitives take a [`Retrace`] hook that is run on every node of the
//! mutated path, deepest first, which is how the AVL layer grafts height
//! maintenance and rotations onto the plain algorithms.

use super::node::{Link, Node, NodeRef, height};
use super::observer::Trigger;
use super::traversal::{self, InvariantViolation, Iter, LevelOrder};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Hook run on each ancestor of a structural change, bottom-up
pub(crate) trait Retrace<K> {
    /// Restore the invariants of the subtree in `slot` after one of its
    /// children changed.
    ///
    /// Returns `true` if the height of the subtree changed.
    fn retrace(&mut self, slot: &mut Box<Node<K>>, trigger: Trigger) -> bool;
}

/// Keeps cached heights correct without reshaping anything
pub(crate) struct HeightOnly;

impl<K> Retrace<K> for HeightOnly {
    #[inline]
    fn retrace(&mut self, slot: &mut Box<Node<K>>, _trigger: Trigger) -> bool {
        slot.update_height()
    }
}

/// Binary search tree with delete-by-copying
///
/// Equal keys are accepted and descend to the right. Two-child deletion
/// promotes the in-order predecessor.
///
/// # Examples
/// ```
/// use avl_dictionary::core::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// for key in [2, 1, 3] {
///     tree.insert(key);
/// }
/// assert!(tree.contains(&3));
/// assert!(tree.delete(&2));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> OrderedTree<K> {
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: `-1` when empty, `0` for a single node
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Read-only view of the root node
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        NodeRef::from_link(&self.root)
    }

    /// Keys in ascending order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root)
    }

    /// Keys breadth-first: root first, left child before right child
    #[must_use]
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    #[inline]
    pub(crate) const fn root_link(&self) -> &Link<K> {
        &self.root
    }
}

impl<K: Ord> OrderedTree<K> {
    /// Insert a key, keeping cached heights current
    pub fn insert(&mut self, key: K) {
        self.insert_with(key, &mut HeightOnly);
    }

    /// Remove one occurrence of `key`
    ///
    /// Returns `false` if the key was absent.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.delete_with(key, &mut HeightOnly)
    }

    /// Check membership
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = &self.root;
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Check sort order and cached heights of every node
    ///
    /// Walks the whole tree; meant for tests and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        traversal::validate(&self.root, false)
    }

    pub(crate) fn insert_with<R: Retrace<K>>(&mut self, key: K, retrace: &mut R) {
        insert_at(&mut self.root, key, retrace);
        self.len += 1;
    }

    pub(crate) fn delete_with<Q, R>(&mut self, key: &Q, retrace: &mut R) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        R: Retrace<K>,
    {
        let removed = delete_at(&mut self.root, key, retrace);
        if removed {
            self.len -= 1;
        }
        removed
    }
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for OrderedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Descend by comparison and hang a new leaf. Returns whether the height of
/// the subtree in `link` changed.
fn insert_at<K: Ord, R: Retrace<K>>(link: &mut Link<K>, key: K, retrace: &mut R) -> bool {
    match *link {
        None => {
            *link = Some(Box::new(Node::leaf(key)));
            true
        }
        Some(ref mut node) => {
            let child = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            // An unchanged child height cannot unbalance or resize anything above
            insert_at(child, key, retrace) && retrace.retrace(node, Trigger::Insert)
        }
    }
}

/// Remove the first node matching `key` on the search path. Every ancestor of
/// the physically removed node is retraced.
fn delete_at<K, Q, R>(link: &mut Link<K>, key: &Q, retrace: &mut R) -> bool
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
    R: Retrace<K>,
{
    let Some(node) = link.as_mut() else {
        return false;
    };

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => delete_at(&mut node.left, key, retrace),
        Ordering::Greater => delete_at(&mut node.right, key, retrace),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            if let Some(predecessor) = take_max(&mut node.left, retrace) {
                node.key = predecessor;
            }
            true
        }
        Ordering::Equal => {
            let child = node.left.take().or_else(|| node.right.take());
            *link = child;
            return true;
        }
    };

    if removed && let Some(node) = link.as_mut() {
        retrace.retrace(node, Trigger::Delete);
    }
    removed
}

/// Unlink the maximum node of a subtree and return its key
fn take_max<K, R: Retrace<K>>(link: &mut Link<K>, retrace: &mut R) -> Option<K> {
    let node = link.as_mut()?;
    if node.right.is_some() {
        let key = take_max(&mut node.right, retrace);
        retrace.retrace(node, Trigger::Delete);
        return key;
    }

    let Node { key, left, .. } = *link.take()?;
    *link = left;
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i32]) -> OrderedTree<i32> {
        keys.iter().copied().collect()
    }

    fn keys(tree: &OrderedTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn empty_tree() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert!(!tree.contains(&1));
        assert!(tree.root().is_none());
    }

    #[test]
    fn insert_keeps_sort_order() {
        let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(keys(&tree), [20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.height(), 2);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn sorted_inserts_degenerate() {
        let tree = tree_of(&[1, 2, 3, 4]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.root().map(|r| *r.key()), Some(1));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn duplicates_descend_right() {
        let tree = tree_of(&[5, 5]);
        assert_eq!(tree.len(), 2);
        let root = tree.root().unwrap();
        assert!(root.left().is_none());
        assert_eq!(root.right().map(|r| *r.key()), Some(5));
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut tree = tree_of(&[2, 1, 3]);
        assert!(!tree.delete(&9));
        assert_eq!(tree.len(), 3);

        let mut empty: OrderedTree<i32> = OrderedTree::new();
        assert!(!empty.delete(&1));
    }

    #[test]
    fn delete_leaf_and_single_child() {
        let mut tree = tree_of(&[50, 30, 70, 20]);
        assert!(tree.delete(&20));
        assert_eq!(keys(&tree), [30, 50, 70]);

        tree.insert(60);
        assert!(tree.delete(&70));
        assert_eq!(keys(&tree), [30, 50, 60]);
        assert_eq!(tree.root().and_then(|r| r.right()).map(|n| *n.key()), Some(60));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn delete_two_children_promotes_predecessor() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40]);
        assert!(tree.delete(&50));

        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 40);
        assert_eq!(keys(&tree), [20, 30, 40, 70]);
        assert_eq!(tree.len(), 4);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn predecessor_left_child_is_spliced() {
        // 40 has a left child, so removing it as predecessor lifts 35
        let mut tree = tree_of(&[50, 30, 70, 40, 35]);
        assert!(tree.delete(&50));
        assert_eq!(tree.root().map(|r| *r.key()), Some(40));
        assert_eq!(keys(&tree), [30, 35, 40, 70]);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn heights_follow_deletions() {
        let mut tree = tree_of(&[1, 2, 3, 4]);
        assert!(tree.delete(&4));
        assert_eq!(tree.height(), 2);
        assert!(tree.delete(&1));
        assert_eq!(tree.height(), 1);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn string_keys_lookup_by_str() {
        let mut tree = OrderedTree::new();
        tree.insert("pear".to_string());
        tree.insert("apple".to_string());
        assert!(tree.contains("apple"));
        assert!(tree.delete("pear"));
        assert!(!tree.contains("pear"));
    }
}
