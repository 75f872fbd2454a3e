//! Ordered-key containers
//!
//! The tree types in this module have no dependencies on the rest of the
//! crate. [`OrderedTree`] enforces sort order only; [`BalancedTree`] builds
//! on it and keeps every node within one level of balance.

mod balanced;
mod node;
pub mod observer;
mod ordered;
mod traversal;

pub use balanced::BalancedTree;
pub use node::{EMPTY_HEIGHT, NodeRef};
pub use observer::{
    EventLog, NoopObserver, RebalanceEvent, RebalanceObserver, RebalanceRecord, RotationCase,
    RotationCounter, TracingObserver, Trigger,
};
pub use ordered::OrderedTree;
pub use traversal::{InvariantViolation, Iter, LevelOrder, avl_height_bound};
