//! Tree node representation
//!
//! A node owns its key and up to two children through `Box`, and caches the
//! height of the subtree it roots.

use std::fmt;

/// An owned, possibly empty subtree
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Height of an empty subtree
pub const EMPTY_HEIGHT: i32 = -1;

/// A binary search tree node with a cached subtree height
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
}

impl<K> Node<K> {
    /// Create a leaf node (height 0)
    #[must_use]
    pub(crate) const fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Recompute the cached height from the two cached child heights
    ///
    /// Returns `true` if the height changed.
    #[inline]
    pub(crate) fn update_height(&mut self) -> bool {
        let height = 1 + height(&self.left).max(height(&self.right));
        let changed = height != self.height;
        self.height = height;
        changed
    }

    /// `height(right) - height(left)`, from cached values only
    #[inline]
    #[must_use]
    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.right) - height(&self.left)
    }
}

/// Cached height of a subtree, `-1` when empty
#[inline]
#[must_use]
pub(crate) fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(EMPTY_HEIGHT, |node| node.height)
}

/// Read-only view of a node for traversal and rendering
///
/// Obtained from [`OrderedTree::root`](super::OrderedTree::root) or
/// [`BalancedTree::root`](super::BalancedTree::root).
pub struct NodeRef<'a, K> {
    node: &'a Node<K>,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    #[inline]
    pub(crate) const fn new(node: &'a Node<K>) -> Self {
        Self { node }
    }

    #[inline]
    pub(crate) fn from_link(link: &'a Link<K>) -> Option<Self> {
        link.as_deref().map(Self::new)
    }

    /// The key stored in this node
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &'a K {
        &self.node.key
    }

    /// Left child, if any
    #[inline]
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        Self::from_link(&self.node.left)
    }

    /// Right child, if any
    #[inline]
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        Self::from_link(&self.node.right)
    }

    /// Cached height of the subtree rooted here (a leaf is 0)
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.node.height
    }

    /// `height(right) - height(left)`
    #[inline]
    #[must_use]
    pub fn balance_factor(&self) -> i32 {
        self.node.balance_factor()
    }

    /// Whether this node has no children
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.node.key)
            .field("height", &self.node.height)
            .field("balance", &self.node.balance_factor())
            .finish()
    }
}
