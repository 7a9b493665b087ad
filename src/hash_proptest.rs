#![cfg(test)]

// Property tests for the hashed containers kept inside the crate so they do
// not require feature gates to access internal modules.

use crate::hash_map::{MultiMap, UniqueMap};
use proptest::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hasher;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Assign(usize, i32),
    Erase(usize),
    Extract(usize),
    Find(usize),
    Contains(String),
    Mutate(usize, i32),
    Rehash(usize),
    Iterate,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Assign(i, v)),
            idx.clone().prop_map(OpI::Erase),
            idx.clone().prop_map(OpI::Extract),
            idx.clone().prop_map(OpI::Find),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            (1usize..64).prop_map(OpI::Rehash),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// One state-machine body shared by the default-hasher and collision runs.
// Invariants exercised across random operation sequences:
// - First write wins: insert of a present key leaves the value untouched and
//   reports `false`; `insert_or_assign` overwrites in place.
// - `find`/`contains_key` parity with the model; `find` yields `end()` on
//   absence and a cursor resolving to the mapped pair on presence.
// - `erase`/`extract` return exactly what the model holds.
// - Iteration yields live entries exactly once, in insertion order of the
//   surviving keys.
// - Bucket occupancy always sums to `len`, the load factor never exceeds the
//   cap, and `rehash` never loses or reorders entries.
fn run_unique_scenario<S>(
    mut sut: UniqueMap<Key, i32, S>,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: std::hash::BuildHasher,
{
    let mut model: HashMap<Key, i32> = HashMap::new();
    let mut order: Vec<Key> = Vec::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = key_from(&pool, i);
                let already = model.contains_key(&k);
                let (c, inserted) = sut.insert(k.clone(), v);
                prop_assert_eq!(inserted, !already, "insert reports presence wrong");
                let (ck, cv) = sut.pair_at(c).expect("returned cursor resolves");
                prop_assert!(*ck == k);
                if inserted {
                    model.insert(k.clone(), v);
                    order.push(k);
                } else {
                    // First write wins.
                    prop_assert_eq!(*cv, model[&k]);
                }
            }
            OpI::Assign(i, v) => {
                let k = key_from(&pool, i);
                let already = model.contains_key(&k);
                let (c, inserted) = sut.insert_or_assign(k.clone(), v);
                prop_assert_eq!(inserted, !already);
                let (_, cv) = sut.pair_at(c).expect("returned cursor resolves");
                prop_assert_eq!(*cv, v);
                if model.insert(k.clone(), v).is_none() {
                    order.push(k);
                }
            }
            OpI::Erase(i) => {
                let k = key_from(&pool, i);
                let n = sut.erase(k.0.as_str());
                let expected = usize::from(model.remove(&k).is_some());
                prop_assert_eq!(n, expected);
                order.retain(|o| *o != k);
            }
            OpI::Extract(i) => {
                let k = key_from(&pool, i);
                match sut.extract(k.0.as_str()) {
                    Some((kk, vv)) => {
                        prop_assert!(kk == k);
                        let mv = model.remove(&k).expect("present in model");
                        prop_assert_eq!(vv, mv);
                        order.retain(|o| *o != k);
                    }
                    None => prop_assert!(!model.contains_key(&k)),
                }
            }
            OpI::Find(i) => {
                let k = key_from(&pool, i);
                let c = sut.find(k.0.as_str());
                let present = model.contains_key(&k);
                prop_assert_eq!(c != crate::cursor::Sequence::end(&sut), present);
                if present {
                    let (ck, cv) = sut.pair_at(c).expect("found cursor resolves");
                    prop_assert!(*ck == k);
                    prop_assert_eq!(*cv, model[&k]);
                }
            }
            OpI::Contains(s) => {
                let has = sut.contains_key(s.as_str());
                let has_model = model.keys().any(|k| k.0 == s);
                prop_assert_eq!(has, has_model);
            }
            OpI::Mutate(i, d) => {
                let k = key_from(&pool, i);
                match sut.get_mut(k.0.as_str()) {
                    Some(vr) => {
                        *vr = vr.saturating_add(d);
                        let mv = model.get_mut(&k).expect("present in model");
                        *mv = mv.saturating_add(d);
                    }
                    None => prop_assert!(!model.contains_key(&k)),
                }
            }
            OpI::Rehash(n) => {
                let before: Vec<(Key, i32)> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                sut.rehash(n);
                // Rehash may exceed the request (load floor, rounding) but
                // never lands below it and never disturbs the element list.
                prop_assert!(sut.bucket_count() >= n);
                let after: Vec<(Key, i32)> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(before, after);
            }
            OpI::Iterate => {
                let got: Vec<Key> = sut.iter().map(|(k, _)| k.clone()).collect();
                prop_assert_eq!(&got, &order, "iteration must follow insertion order");
            }
        }

        // Post-conditions after each op.
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let occupancy: usize = (0..sut.bucket_count()).map(|b| sut.bucket_size(b)).sum();
        prop_assert_eq!(occupancy, sut.len());
        prop_assert!(sut.load_factor() <= sut.max_load_factor() + f64::EPSILON);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_unique_map_state_machine((pool, ops) in arb_scenario()) {
        run_unique_scenario(UniqueMap::new(), pool, ops)?;
    }
}

// Collision variant using a constant hasher to stress equality resolution
// inside a single bucket.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl std::hash::BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_unique_map_with_collisions((pool, ops) in arb_scenario()) {
        run_unique_scenario(UniqueMap::with_hasher(ConstBuildHasher), pool, ops)?;
    }
}

// Multi-map scenario against a Vec model that preserves insertion order.
#[derive(Clone, Debug)]
enum MultiOp {
    Insert(usize, i32),
    EraseAll(usize),
    Count(usize),
    FindAll(usize),
    Iterate,
}

fn arb_multi_scenario() -> impl Strategy<Value = (Vec<String>, Vec<MultiOp>)> {
    proptest::collection::vec("[a-z]{0,3}", 1..=5).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| MultiOp::Insert(i, v)),
            idx.clone().prop_map(MultiOp::EraseAll),
            idx.clone().prop_map(MultiOp::Count),
            idx.clone().prop_map(MultiOp::FindAll),
            Just(MultiOp::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: MultiMap keeps every duplicate, counts by multiplicity, erases
// by key as a group, and iterates all copies in insertion order.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_multi_map_state_machine((pool, ops) in arb_multi_scenario()) {
        let mut sut: MultiMap<Key, i32> = MultiMap::new();
        let mut model: Vec<(Key, i32)> = Vec::new();

        for op in ops {
            match op {
                MultiOp::Insert(i, v) => {
                    let k = key_from(&pool, i);
                    let c = sut.insert(k.clone(), v);
                    let (ck, cv) = sut.pair_at(c).expect("returned cursor resolves");
                    prop_assert!(*ck == k);
                    prop_assert_eq!(*cv, v);
                    model.push((k, v));
                }
                MultiOp::EraseAll(i) => {
                    let k = key_from(&pool, i);
                    let n = sut.erase(k.0.as_str());
                    let expected = model.iter().filter(|(mk, _)| *mk == k).count();
                    prop_assert_eq!(n, expected);
                    model.retain(|(mk, _)| *mk != k);
                }
                MultiOp::Count(i) => {
                    let k = key_from(&pool, i);
                    let expected = model.iter().filter(|(mk, _)| *mk == k).count();
                    prop_assert_eq!(sut.count(k.0.as_str()), expected);
                }
                MultiOp::FindAll(i) => {
                    let k = key_from(&pool, i);
                    let got: Vec<i32> = sut
                        .find_all(k.0.as_str())
                        .into_iter()
                        .map(|c| sut.pair_at(c).expect("cursor resolves").1)
                        .collect();
                    let expected: Vec<i32> = model
                        .iter()
                        .filter(|(mk, _)| *mk == k)
                        .map(|(_, v)| *v)
                        .collect();
                    prop_assert_eq!(got, expected, "duplicates must keep insertion order");
                }
                MultiOp::Iterate => {
                    let got: Vec<(Key, i32)> =
                        sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(&got, &model);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            let occupancy: usize =
                (0..sut.bucket_count()).map(|b| sut.bucket_size(b)).sum();
            prop_assert_eq!(occupancy, sut.len());
        }
    }
}
