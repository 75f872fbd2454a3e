//! AVL layer
//!
//! [`BalancedTree`] owns an [`OrderedTree`] and runs its insert and delete
//! primitives with a retrace hook that refreshes cached heights and rotates
//! any node whose balance factor reaches ±2.
//!
//! | balance(n) | heavy child leans | action                        |
//! |------------|-------------------|-------------------------------|
//! | -2         | left or even      | rotate right at n             |
//! | -2         | right             | rotate left at n.left, then right at n |
//! | +2         | right or even     | rotate left at n              |
//! | +2         | left              | rotate right at n.right, then left at n |

use super::node::{Node, NodeRef};
use super::observer::{NoopObserver, RebalanceEvent, RebalanceObserver, RotationCase, Trigger};
use super::ordered::{OrderedTree, Retrace};
use super::traversal::{self, InvariantViolation, Iter, LevelOrder};
use std::borrow::Borrow;
use std::mem;

/// Self-balancing binary search tree
///
/// Every rebalance is reported to the observer `O` before it is applied.
///
/// # Examples
/// ```
/// use avl_dictionary::core::BalancedTree;
///
/// let mut tree = BalancedTree::new();
/// for key in [30, 20, 10] {
///     tree.insert(key);
/// }
///
/// // The third insert triggered a single right rotation
/// let root = tree.root().unwrap();
/// assert_eq!(*root.key(), 20);
/// assert_eq!(root.left().map(|n| *n.key()), Some(10));
/// assert_eq!(root.right().map(|n| *n.key()), Some(30));
/// ```
#[derive(Debug, Clone)]
pub struct BalancedTree<K, O = NoopObserver> {
    tree: OrderedTree<K>,
    observer: O,
}

impl<K> BalancedTree<K> {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl<K, O> BalancedTree<K, O> {
    /// Create an empty tree reporting rebalances to `observer`
    #[must_use]
    pub const fn with_observer(observer: O) -> Self {
        Self {
            tree: OrderedTree::new(),
            observer,
        }
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Number of keys
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height of the tree: `-1` when empty, `0` for a single node
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.tree.height()
    }

    /// Read-only view of the root node
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.tree.root()
    }

    /// Keys in ascending order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K> {
        self.tree.iter()
    }

    /// Keys breadth-first: root first, left child before right child
    #[must_use]
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        self.tree.level_order()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<K: Ord, O: RebalanceObserver<K>> BalancedTree<K, O> {
    /// Insert a key and restore balance along the insertion path
    ///
    /// Equal keys are not rejected here; callers that need set semantics
    /// check [`contains`](Self::contains) first.
    pub fn insert(&mut self, key: K) {
        let mut hook = Rebalance {
            observer: &mut self.observer,
        };
        self.tree.insert_with(key, &mut hook);
    }

    /// Remove one occurrence of `key` and restore balance up to the root
    ///
    /// Returns `false` if the key was absent.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut hook = Rebalance {
            observer: &mut self.observer,
        };
        self.tree.delete_with(key, &mut hook)
    }
}

impl<K: Ord, O> BalancedTree<K, O> {
    /// Check membership
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Check sort order, cached heights and balance of every node
    ///
    /// Walks the whole tree; meant for tests and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        traversal::validate(self.tree.root_link(), true)
    }
}

impl<K, O: Default> Default for BalancedTree<K, O> {
    fn default() -> Self {
        Self::with_observer(O::default())
    }
}

impl<K: Ord, O: RebalanceObserver<K>> Extend<K> for BalancedTree<K, O> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord, O: RebalanceObserver<K> + Default> FromIterator<K> for BalancedTree<K, O> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, O> IntoIterator for &'a BalancedTree<K, O> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Retrace hook that keeps every node on the path within balance
struct Rebalance<'o, O> {
    observer: &'o mut O,
}

impl<K, O: RebalanceObserver<K>> Retrace<K> for Rebalance<'_, O> {
    fn retrace(&mut self, slot: &mut Box<Node<K>>, trigger: Trigger) -> bool {
        let before = slot.height;
        slot.update_height();

        if let Some(case) = imbalance(slot) {
            self.observer.on_rebalance(&RebalanceEvent {
                case,
                trigger,
                key: &slot.key,
                balance_factor: slot.balance_factor(),
            });
            rotate(slot, case);
        }

        // After an insert-triggered rotation the subtree is back to its old
        // height, so this is false and the walk stops.
        slot.height != before
    }
}

/// Classify a node whose balance factor left `-1..=1`
fn imbalance<K>(node: &Node<K>) -> Option<RotationCase> {
    let lean = |child: &Option<Box<Node<K>>>| child.as_ref().map_or(0, |c| c.balance_factor());

    match node.balance_factor() {
        bf if bf < -1 => Some(if lean(&node.left) <= 0 {
            RotationCase::LeftLeft
        } else {
            RotationCase::LeftRight
        }),
        bf if bf > 1 => Some(if lean(&node.right) >= 0 {
            RotationCase::RightRight
        } else {
            RotationCase::RightLeft
        }),
        _ => None,
    }
}

fn rotate<K>(slot: &mut Box<Node<K>>, case: RotationCase) {
    match case {
        RotationCase::LeftLeft => rotate_right(slot),
        RotationCase::LeftRight => {
            if let Some(left) = slot.left.as_mut() {
                rotate_left(left);
            }
            rotate_right(slot);
        }
        RotationCase::RightRight => rotate_left(slot),
        RotationCase::RightLeft => {
            if let Some(right) = slot.right.as_mut() {
                rotate_right(right);
            }
            rotate_left(slot);
        }
    }
}

/// Promote the left child of `slot` into its place
///
/// ```text
///       n             l
///      / \           / \
///     l   c   =>    a   n
///    / \               / \
///   a   b             b   c
/// ```
fn rotate_right<K>(slot: &mut Box<Node<K>>) {
    let Some(mut pivot) = slot.left.take() else {
        return;
    };
    slot.left = pivot.right.take();
    slot.update_height();
    mem::swap(slot, &mut pivot);
    // `slot` now holds the promoted node, `pivot` the demoted one
    slot.right = Some(pivot);
    slot.update_height();
}

/// Promote the right child of `slot` into its place
fn rotate_left<K>(slot: &mut Box<Node<K>>) {
    let Some(mut pivot) = slot.right.take() else {
        return;
    };
    slot.right = pivot.left.take();
    slot.update_height();
    mem::swap(slot, &mut pivot);
    slot.left = Some(pivot);
    slot.update_height();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::observer::{RotationCounter, TracingObserver};

    fn shape(tree: &BalancedTree<i32, RotationCounter>) -> (i32, Option<i32>, Option<i32>) {
        let root = tree.root().unwrap();
        (
            *root.key(),
            root.left().map(|n| *n.key()),
            root.right().map(|n| *n.key()),
        )
    }

    fn build(keys: &[i32]) -> BalancedTree<i32, RotationCounter> {
        keys.iter().copied().collect()
    }

    #[test]
    fn left_left_case() {
        let tree = build(&[30, 20, 10]);
        assert_eq!(shape(&tree), (20, Some(10), Some(30)));
        assert_eq!(tree.observer().count(RotationCase::LeftLeft), 1);
        assert_eq!(tree.height(), 1);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn left_right_case() {
        let tree = build(&[30, 10, 20]);
        assert_eq!(shape(&tree), (20, Some(10), Some(30)));
        assert_eq!(tree.observer().count(RotationCase::LeftRight), 1);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn right_right_case() {
        let tree = build(&[10, 20, 30]);
        assert_eq!(shape(&tree), (20, Some(10), Some(30)));
        assert_eq!(tree.observer().count(RotationCase::RightRight), 1);
    }

    #[test]
    fn right_left_case() {
        let tree = build(&[10, 30, 20]);
        assert_eq!(shape(&tree), (20, Some(10), Some(30)));
        assert_eq!(tree.observer().count(RotationCase::RightLeft), 1);
    }

    #[test]
    fn insert_stops_after_first_fix() {
        // 1..=7 ascending yields a perfect tree with exactly four single rotations
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.observer().total(), 4);
        assert_eq!(tree.observer().count(RotationCase::RightRight), 4);
        assert_eq!(shape(&tree), (4, Some(2), Some(6)));
    }

    #[test]
    fn two_child_delete_promotes_predecessor() {
        let mut tree = build(&[20, 10, 30]);
        assert!(tree.delete(&20));

        assert_eq!(tree.len(), 2);
        assert_eq!(shape(&tree), (10, None, Some(30)));
        assert!(!tree.contains(&20));
        assert!(tree.contains(&10));
        assert!(tree.contains(&30));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn delete_rebalances_ancestors() {
        let mut tree = build(&[20, 10, 30, 25]);
        tree.observer_mut().reset();

        // Removing 10 leaves 20 right-heavy with 30 leaning left
        assert!(tree.delete(&10));
        assert_eq!(tree.observer().count(RotationCase::RightLeft), 1);
        assert_eq!(shape(&tree), (25, Some(20), Some(30)));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn delete_can_rebalance_more_than_one_ancestor() {
        // Fibonacci-shaped tree: deleting the shallow leaf cascades to the root
        let mut tree = build(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
        assert!(tree.validate().is_ok());
        tree.observer_mut().reset();

        assert!(tree.delete(&12));
        assert!(tree.observer().total() >= 2);
        assert!(tree.validate().is_ok());
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn delete_missing_and_empty() {
        let mut tree: BalancedTree<i32> = BalancedTree::new();
        assert!(!tree.delete(&1));
        tree.insert(1);
        assert!(!tree.delete(&2));
        assert!(tree.delete(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn duplicates_are_accepted_structurally() {
        let mut tree: BalancedTree<i32> = [5, 5, 5].into_iter().collect();
        assert_eq!(tree.len(), 3);
        assert!(tree.validate().is_ok());
        assert!(tree.delete(&5));
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(&5));
    }

    #[test]
    fn events_name_the_unbalanced_node() {
        let mut seen = Vec::new();
        {
            struct Collect<'a>(&'a mut Vec<(RotationCase, Trigger, i32, i32)>);
            impl RebalanceObserver<i32> for Collect<'_> {
                fn on_rebalance(&mut self, event: &RebalanceEvent<'_, i32>) {
                    self.0
                        .push((event.case, event.trigger, *event.key, event.balance_factor));
                }
            }

            let mut tree = BalancedTree::with_observer(Collect(&mut seen));
            for key in [30, 10, 20] {
                tree.insert(key);
            }
        }
        assert_eq!(seen, [(RotationCase::LeftRight, Trigger::Insert, 30, -2)]);
    }

    #[test]
    fn tracing_observer_over_a_long_run() {
        let mut tree = BalancedTree::with_observer(TracingObserver);
        tree.extend((0..500).rev());
        for key in (0..500).step_by(3) {
            assert!(tree.delete(&key));
        }
        assert!(tree.validate().is_ok());
        assert_eq!(tree.len(), 333);

        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }
}
