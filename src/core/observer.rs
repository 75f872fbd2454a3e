//! Rebalance observation
//!
//! The balancing code never prints. Each rotation is described by a
//! [`RebalanceEvent`] and handed to a [`RebalanceObserver`], which decides
//! whether to log it, count it, or keep it for display.

use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// The structural change that led to a rebalance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Insert,
    Delete,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "insert"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The four AVL imbalance shapes
///
/// Named after the path from the unbalanced node to its heavy grandchild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationCase {
    /// Left-heavy node whose left child does not lean right: single right rotation
    LeftLeft,
    /// Left-heavy node whose left child leans right: left then right rotation
    LeftRight,
    /// Right-heavy node whose right child does not lean left: single left rotation
    RightRight,
    /// Right-heavy node whose right child leans left: right then left rotation
    RightLeft,
}

impl RotationCase {
    /// Every case, in table order
    pub const ALL: [Self; 4] = [
        Self::LeftLeft,
        Self::LeftRight,
        Self::RightRight,
        Self::RightLeft,
    ];

    /// Number of single rotations this case performs
    #[must_use]
    pub const fn rotations(self) -> usize {
        match self {
            Self::LeftLeft | Self::RightRight => 1,
            Self::LeftRight | Self::RightLeft => 2,
        }
    }

    /// Whether this case is a composite rotation
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.rotations() == 2
    }

    const fn index(self) -> usize {
        match self {
            Self::LeftLeft => 0,
            Self::LeftRight => 1,
            Self::RightRight => 2,
            Self::RightLeft => 3,
        }
    }
}

impl fmt::Display for RotationCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftLeft => "LL (right rotation)",
            Self::LeftRight => "LR (left-right rotation)",
            Self::RightRight => "RR (left rotation)",
            Self::RightLeft => "RL (right-left rotation)",
        };
        f.write_str(name)
    }
}

/// A single rebalance, reported before the rotation is applied
#[derive(Debug, Clone, Copy)]
pub struct RebalanceEvent<'a, K> {
    pub case: RotationCase,
    pub trigger: Trigger,
    /// Key of the node found unbalanced
    pub key: &'a K,
    /// Balance factor of that node, always -2 or +2
    pub balance_factor: i32,
}

/// Receives rebalance events from a [`BalancedTree`](super::BalancedTree)
pub trait RebalanceObserver<K> {
    fn on_rebalance(&mut self, event: &RebalanceEvent<'_, K>);
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<K> RebalanceObserver<K> for NoopObserver {
    #[inline]
    fn on_rebalance(&mut self, _event: &RebalanceEvent<'_, K>) {}
}

/// Observer that emits one `debug!` record per rebalance
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<K: fmt::Debug> RebalanceObserver<K> for TracingObserver {
    fn on_rebalance(&mut self, event: &RebalanceEvent<'_, K>) {
        debug!(
            case = %event.case,
            trigger = %event.trigger,
            key = ?event.key,
            balance = event.balance_factor,
            "rebalanced node"
        );
    }
}

/// Counts rebalances per case
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RotationCounter {
    counts: [usize; 4],
}

impl RotationCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 4] }
    }

    /// Rebalances observed for one case
    #[must_use]
    pub const fn count(&self, case: RotationCase) -> usize {
        self.counts[case.index()]
    }

    /// Rebalances observed across all cases
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Single rotations performed, counting a double rotation as two
    #[must_use]
    pub fn rotations(&self) -> usize {
        RotationCase::ALL
            .iter()
            .map(|&case| self.count(case) * case.rotations())
            .sum()
    }

    /// Rebalances that needed a double rotation
    #[must_use]
    pub fn double_rotations(&self) -> usize {
        RotationCase::ALL
            .iter()
            .filter(|case| case.is_double())
            .map(|&case| self.count(case))
            .sum()
    }

    pub fn record(&mut self, case: RotationCase) {
        self.counts[case.index()] += 1;
    }

    pub fn reset(&mut self) {
        self.counts = [0; 4];
    }
}

impl<K> RebalanceObserver<K> for RotationCounter {
    fn on_rebalance(&mut self, event: &RebalanceEvent<'_, K>) {
        self.record(event.case);
    }
}

/// An owned copy of a [`RebalanceEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebalanceRecord {
    pub case: RotationCase,
    pub trigger: Trigger,
    pub key: String,
}

impl fmt::Display for RebalanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at '{}' after {}", self.case, self.key, self.trigger)
    }
}

/// Default number of records an [`EventLog`] retains
pub const DEFAULT_LOG_CAPACITY: usize = 64;

/// Observer that traces, counts and keeps the most recent rebalances
///
/// Front ends drain the pending records after each mutation to show what the
/// tree did.
#[derive(Debug, Clone)]
pub struct EventLog {
    pending: VecDeque<RebalanceRecord>,
    capacity: usize,
    counter: RotationCounter,
}

impl EventLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)),
            capacity: capacity.max(1),
            counter: RotationCounter::new(),
        }
    }

    /// Take every record not drained yet, oldest first
    pub fn drain(&mut self) -> Vec<RebalanceRecord> {
        self.pending.drain(..).collect()
    }

    /// Counts since creation or the last [`reset_counts`](Self::reset_counts)
    #[must_use]
    pub const fn counter(&self) -> &RotationCounter {
        &self.counter
    }

    pub fn reset_counts(&mut self) {
        self.counter.reset();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl<K: fmt::Display> RebalanceObserver<K> for EventLog {
    fn on_rebalance(&mut self, event: &RebalanceEvent<'_, K>) {
        debug!(
            case = %event.case,
            trigger = %event.trigger,
            key = %event.key,
            balance = event.balance_factor,
            "rebalanced node"
        );
        self.counter.record(event.case);
        if self.pending.len() == self.capacity {
            self.pending.pop_front();
        }
        self.pending.push_back(RebalanceRecord {
            case: event.case,
            trigger: event.trigger,
            key: event.key.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe<O: RebalanceObserver<&'static str>>(
        observer: &mut O,
        case: RotationCase,
        key: &'static str,
    ) {
        observer.on_rebalance(&RebalanceEvent {
            case,
            trigger: Trigger::Insert,
            key: &key,
            balance_factor: -2,
        });
    }

    #[test]
    fn counter_tracks_cases_and_rotations() {
        let mut counter = RotationCounter::new();
        observe(&mut counter, RotationCase::LeftLeft, "a");
        observe(&mut counter, RotationCase::LeftRight, "b");
        observe(&mut counter, RotationCase::LeftRight, "c");

        assert_eq!(counter.count(RotationCase::LeftLeft), 1);
        assert_eq!(counter.count(RotationCase::LeftRight), 2);
        assert_eq!(counter.count(RotationCase::RightLeft), 0);
        assert_eq!(counter.total(), 3);
        assert_eq!(counter.rotations(), 5);
        assert_eq!(counter.double_rotations(), 2);
    }

    #[test]
    fn event_log_drains_in_order() {
        let mut log = EventLog::default();
        observe(&mut log, RotationCase::RightRight, "apple");
        observe(&mut log, RotationCase::RightLeft, "pear");

        let records = log.drain();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "apple");
        assert_eq!(records[1].case, RotationCase::RightLeft);
        assert!(log.drain().is_empty());
        assert_eq!(log.counter().total(), 2);
    }

    #[test]
    fn event_log_drops_oldest_when_full() {
        let mut log = EventLog::with_capacity(2);
        for key in ["a", "b", "c"] {
            observe(&mut log, RotationCase::LeftLeft, key);
        }

        let keys: Vec<String> = log.drain().into_iter().map(|r| r.key).collect();
        assert_eq!(keys, ["b", "c"]);
        assert_eq!(log.counter().count(RotationCase::LeftLeft), 3);
    }

    #[test]
    fn case_display_and_arity() {
        assert!(RotationCase::LeftRight.is_double());
        assert!(!RotationCase::RightRight.is_double());
        assert_eq!(RotationCase::LeftLeft.to_string(), "LL (right rotation)");
        assert_eq!(Trigger::Delete.to_string(), "delete");
    }
}
