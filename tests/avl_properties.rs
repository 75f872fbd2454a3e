use avl_dictionary::core::{BalancedTree, OrderedTree, RotationCounter, avl_height_bound};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
enum Op {
    Insert(u16),
    Delete(u16),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => (0u16..256).prop_map(Op::Insert),
        2 => (0u16..256).prop_map(Op::Delete),
    ];
    prop::collection::vec(op, 0..400)
}

/// Keys of a multiset in ascending order, repeated by count
fn expand(counts: &BTreeMap<u16, usize>) -> Vec<u16> {
    counts
        .iter()
        .flat_map(|(&key, &count)| std::iter::repeat_n(key, count))
        .collect()
}

fn remove_one(counts: &mut BTreeMap<u16, usize>, key: u16) -> bool {
    match counts.get_mut(&key) {
        Some(count) if *count > 1 => {
            *count -= 1;
            true
        }
        Some(_) => {
            counts.remove(&key);
            true
        }
        None => false,
    }
}

fn chk_balanced<O>(tree: &BalancedTree<u16, O>, counts: &BTreeMap<u16, usize>) {
    let expected = expand(counts);
    assert_eq!(tree.len(), expected.len());
    assert!(tree.iter().copied().eq(expected.iter().copied()));
    tree.validate().unwrap();
    assert!(f64::from(tree.height()) <= avl_height_bound(tree.len()));
}

proptest! {
    #[test]
    fn balanced_tree_matches_multiset(ops in ops()) {
        let mut tree: BalancedTree<u16, RotationCounter> = BalancedTree::default();
        let mut counts = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    tree.insert(key);
                    *counts.entry(key).or_insert(0) += 1;
                }
                Op::Delete(key) => {
                    prop_assert_eq!(tree.delete(&key), remove_one(&mut counts, key));
                }
            }
            chk_balanced(&tree, &counts);
        }
    }

    #[test]
    fn ordered_tree_matches_multiset(ops in ops()) {
        let mut tree = OrderedTree::new();
        let mut counts = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    tree.insert(key);
                    *counts.entry(key).or_insert(0) += 1;
                }
                Op::Delete(key) => {
                    prop_assert_eq!(tree.delete(&key), remove_one(&mut counts, key));
                }
            }
        }

        let expected = expand(&counts);
        prop_assert_eq!(tree.len(), expected.len());
        prop_assert!(tree.iter().copied().eq(expected.iter().copied()));
        prop_assert!(tree.validate().is_ok());
    }

    #[test]
    fn membership_round_trip(
        keys in prop::collection::vec(0u16..1024, 1..200),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: BalancedTree<u16> = keys.iter().copied().collect();
        let victim = keys[pick.index(keys.len())];
        let others: BTreeSet<u16> = keys.iter().copied().filter(|&k| k != victim).collect();

        prop_assert!(tree.contains(&victim));
        while tree.delete(&victim) {}
        prop_assert!(!tree.contains(&victim));
        for key in &others {
            prop_assert!(tree.contains(key));
        }
    }

    #[test]
    fn level_order_rebuild_has_same_keys(keys in prop::collection::vec(any::<u16>(), 0..300)) {
        let tree: BalancedTree<u16> = keys.iter().copied().collect();
        let rebuilt: BalancedTree<u16> = tree.level_order().copied().collect();

        prop_assert!(tree.iter().eq(rebuilt.iter()));
        prop_assert!(rebuilt.validate().is_ok());
    }
}

#[test]
fn seeded_workload_against_btreeset() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree: BalancedTree<u32> = BalancedTree::new();
    let mut reference = BTreeSet::new();

    for step in 0..20_000 {
        let key = rng.random_range(0..2_000);
        if rng.random_bool(0.6) {
            if reference.insert(key) {
                tree.insert(key);
            }
        } else {
            assert_eq!(tree.delete(&key), reference.remove(&key));
        }

        if step % 500 == 0 {
            tree.validate().unwrap();
        }
    }

    assert_eq!(tree.len(), reference.len());
    assert!(tree.iter().eq(reference.iter()));
    tree.validate().unwrap();
    assert!(f64::from(tree.height()) <= avl_height_bound(tree.len()));
}

#[test]
fn sorted_input_stays_logarithmic() {
    let tree: BalancedTree<u32> = (0..100_000).collect();
    tree.validate().unwrap();
    assert!(tree.height() <= 17);

    let chain: OrderedTree<u32> = (0..200).collect();
    assert_eq!(chain.height(), 199);
}

#[test]
fn left_left_insert() {
    let tree: BalancedTree<i32> = [30, 20, 10].into_iter().collect();
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 20);
    assert_eq!(root.left().map(|n| *n.key()), Some(10));
    assert_eq!(root.right().map(|n| *n.key()), Some(30));
}

#[test]
fn left_right_insert() {
    let tree: BalancedTree<i32> = [30, 10, 20].into_iter().collect();
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 20);
    assert_eq!(root.left().map(|n| *n.key()), Some(10));
    assert_eq!(root.right().map(|n| *n.key()), Some(30));
}

#[test]
fn two_child_delete_promotes_predecessor() {
    let mut tree: BalancedTree<i32> = [20, 10, 30].into_iter().collect();
    assert!(tree.delete(&20));

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.root().map(|n| *n.key()), Some(10));
    assert!(!tree.contains(&20));
    assert!(tree.contains(&10));
    assert!(tree.contains(&30));
}
