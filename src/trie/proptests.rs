//! Property tests against a `BTreeSet` model.

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::trie::MexTrie;

/// Universe 0..1000.
const WIDTH: usize = 3;

/// Keys drawn below this bound fill whole leaves after a few dozen adds.
const DENSE_KEYS: u32 = 40;

/// Passes over the op sequence in the dense property.
const DENSE_ROUNDS: usize = 20;

/// Linear-scan mex, `None` once the whole universe is taken.
fn model_mex(set: &BTreeSet<u32>) -> Option<u32> {
    let mut value = 0;
    while set.contains(&value) {
        value += 1;
    }
    (value < 1000).then_some(value)
}

fn build(keys: &[u16]) -> (MexTrie<u32>, BTreeSet<u32>) {
    let mut trie = MexTrie::with_width(WIDTH).unwrap();
    let mut model = BTreeSet::new();
    for &key in keys {
        let key = key as u32 % 1000;
        trie.add(key).unwrap();
        model.insert(key);
    }
    (trie, model)
}

#[quickcheck]
fn prop_add_then_contains(keys: Vec<u16>, probe: u16) -> bool {
    let (mut trie, _) = build(&keys);
    let probe = probe as u32 % 1000;

    let before = trie.len();
    match trie.add(probe) {
        Ok(true) => trie.contains(probe) == Ok(true) && trie.len() == before + 1,
        Ok(false) => trie.contains(probe) == Ok(true) && trie.len() == before,
        Err(_) => false,
    }
}

#[quickcheck]
fn prop_double_add(keys: Vec<u16>, probe: u16) -> bool {
    let (mut trie, model) = build(&keys);
    let probe = probe as u32 % 1000;

    let first = trie.add(probe);
    let len = trie.len();
    first == Ok(!model.contains(&probe)) && trie.add(probe) == Ok(false) && trie.len() == len
}

#[quickcheck]
fn prop_remove_present(keys: Vec<u16>) -> bool {
    let (mut trie, model) = build(&keys);

    model.iter().all(|&key| {
        let before = trie.len();
        trie.remove(key) == Ok(true)
            && trie.contains(key) == Ok(false)
            && trie.len() == before - 1
            && trie.remove(key) == Ok(false)
    }) && trie.is_empty()
        && trie.node_count() == 1
}

#[quickcheck]
fn prop_matches_model(ops: Vec<(bool, u16)>) -> bool {
    let mut trie = MexTrie::<u32>::with_width(WIDTH).unwrap();
    let mut model = BTreeSet::new();

    for (insert, key) in ops {
        let key = key as u32 % 1000;
        let (got, expected) = if insert {
            (trie.add(key), model.insert(key))
        } else {
            (trie.remove(key), model.remove(&key))
        };
        if got != Ok(expected) {
            return false;
        }
        trie.assert_invariants();

        if trie.len() != model.len() || trie.next_int() != model_mex(&model) {
            return false;
        }
    }

    trie.to_vec() == model.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn prop_to_vec_strictly_ascending(keys: Vec<u32>) -> bool {
    let trie = MexTrie::<u32>::from_keys(keys).unwrap();
    let sorted = trie.to_vec();

    sorted.len() == trie.len() && sorted.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn prop_next_int_is_addable(ops: Vec<(bool, u16)>) -> bool {
    let mut trie = MexTrie::<u32>::with_width(WIDTH).unwrap();
    for (insert, key) in ops {
        let key = key as u32 % 1000;
        if insert {
            trie.add(key).unwrap();
        } else {
            trie.remove(key).unwrap();
        }
    }

    match trie.next_int() {
        Some(mex) => trie.contains(mex) == Ok(false) && trie.add(mex) == Ok(true),
        None => trie.len() == 1000,
    }
}

#[quickcheck]
fn prop_round_trip(keys: Vec<u64>) -> bool {
    let keys: Vec<u64> = keys.into_iter().map(|k| k % 10_000_000_000_000_000_000).collect();
    let original = MexTrie::<u64>::from_keys(keys.iter().copied()).unwrap();
    let rebuilt = MexTrie::<u64>::from_keys(original.to_vec()).unwrap();

    rebuilt.len() == original.len()
        && rebuilt.to_vec() == original.to_vec()
        && keys.iter().all(|&k| rebuilt.contains(k) == Ok(true))
        && rebuilt.next_int() == original.next_int()
}

/// Replays `ops` over a dense key range, checking the trie against the
/// model after every step.
///
/// # Returns
/// `(agrees, saturated)`: whether every step matched, and whether keys
/// 0..10 were ever all present at once (a full leaf).
fn run_dense(ops: &[(u8, u8)]) -> (bool, bool) {
    let mut trie = MexTrie::<u32>::with_width(WIDTH).unwrap();
    let mut model = BTreeSet::new();
    let mut saturated = false;

    for _ in 0..DENSE_ROUNDS {
        for &(op, key) in ops {
            let key = key as u32 % DENSE_KEYS;
            // Three adds for every remove
            let (got, expected) = if op % 4 != 0 {
                (trie.add(key), model.insert(key))
            } else {
                (trie.remove(key), model.remove(&key))
            };
            if got != Ok(expected) {
                return (false, saturated);
            }
            trie.assert_invariants();

            if trie.len() != model.len() || trie.next_int() != model_mex(&model) {
                return (false, saturated);
            }
            saturated |= (0..10).all(|k| model.contains(&k));
        }
    }

    let agrees = trie.to_vec() == model.into_iter().collect::<Vec<_>>();
    (agrees, saturated)
}

#[quickcheck]
fn prop_dense_matches_model(ops: Vec<(u8, u8)>) -> bool {
    run_dense(&ops).0
}

#[test]
fn test_dense_churn_fills_leaves() {
    // Fill 0..40, punch holes every third key, then fill them again
    let mut ops: Vec<(u8, u8)> = (0..40).map(|k| (1, k)).collect();
    ops.extend((0..40).step_by(3).map(|k| (0, k)));
    ops.extend((0..40).step_by(3).map(|k| (1, k)));

    let (agrees, saturated) = run_dense(&ops);
    assert!(agrees);
    assert!(saturated);
}
