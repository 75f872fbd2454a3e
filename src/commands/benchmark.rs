//! Benchmark command
//!
//! Runs a seeded random workload of inserts and deletes against the AVL
//! tree, cross-checking every result against `BTreeSet`, then times
//! similar-word queries over the embedded sample list.

use crate::core::{BalancedTree, RotationCounter, avl_height_bound};
use crate::dictionary::Dictionary;
use crate::wordlists::{SAMPLE, loader::words_from_slice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Workload parameters
pub struct BenchmarkConfig {
    /// Number of operations to perform
    pub operations: usize,
    /// Keys are drawn from `0..key_space`
    pub key_space: u32,
    /// Percentage of operations that are inserts
    pub insert_percent: u32,
    pub seed: u64,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(operations: usize) -> Self {
        Self {
            operations,
            key_space: 1 << 20,
            insert_percent: 70,
            seed: 0x5EED,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub operations: usize,
    pub inserts: usize,
    pub deletes: usize,
    /// Operations whose outcome disagreed with `BTreeSet`
    pub mismatches: usize,
    pub final_len: usize,
    pub final_height: i32,
    pub height_bound: f64,
    pub rotations: RotationCounter,
    pub valid: bool,
    pub duration: Duration,
    pub ops_per_second: f64,
    /// Similar-word queries run, one per sample word
    pub similar_queries: usize,
    /// Similar words found across all queries
    pub similar_found: usize,
    pub similar_duration: Duration,
}

/// Run the workload described by `config`
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut tree: BalancedTree<u32, RotationCounter> = BalancedTree::default();
    let mut reference = BTreeSet::new();
    let key_space = config.key_space.max(1);

    let mut inserts = 0;
    let mut deletes = 0;
    let mut mismatches = 0;

    let start = Instant::now();
    for _ in 0..config.operations {
        let key = rng.random_range(0..key_space);
        if rng.random_range(0..100) < config.insert_percent {
            inserts += 1;
            // Set semantics, as the dictionary applies them
            if !tree.contains(&key) {
                tree.insert(key);
            }
            reference.insert(key);
        } else {
            deletes += 1;
            if tree.delete(&key) != reference.remove(&key) {
                mismatches += 1;
            }
        }
    }
    let duration = start.elapsed();

    let (similar_queries, similar_found, similar_duration) = time_similar_queries();

    if tree.len() != reference.len() || !tree.iter().eq(reference.iter()) {
        mismatches += 1;
    }

    BenchmarkResult {
        operations: config.operations,
        inserts,
        deletes,
        mismatches,
        final_len: tree.len(),
        final_height: tree.height(),
        height_bound: avl_height_bound(tree.len()),
        rotations: *tree.observer(),
        valid: tree.validate().is_ok(),
        duration,
        ops_per_second: config.operations as f64 / duration.as_secs_f64().max(f64::EPSILON),
        similar_queries,
        similar_found,
        similar_duration,
    }
}

fn time_similar_queries() -> (usize, usize, Duration) {
    let (dict, _) = Dictionary::from_words(words_from_slice(SAMPLE));

    let start = Instant::now();
    let found = SAMPLE
        .iter()
        .map(|word| dict.find_similar(word).len())
        .sum();
    (SAMPLE.len(), found, start.elapsed())
}
