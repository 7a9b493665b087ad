// Black-box tests of the hashed containers: policy behavior, bucket
// introspection, and rehash dynamics as a caller observes them.

use cursor_collections::{MultiMap, MultiSet, Sequence, UniqueMap, UniqueSet};
use std::hash::{BuildHasher, Hasher};

// Identity-ish hasher so bucket placement is predictable in tests: the
// stored hash of a small integer key is the key itself.
#[derive(Clone, Default)]
struct IdBuildHasher;
struct IdHasher(u64);
impl BuildHasher for IdBuildHasher {
    type Hasher = IdHasher;
    fn build_hasher(&self) -> IdHasher {
        IdHasher(0)
    }
}
impl Hasher for IdHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 << 8) | u64::from(b);
        }
    }
    fn write_u32(&mut self, v: u32) {
        self.0 = u64::from(v);
    }
    fn write_u64(&mut self, v: u64) {
        self.0 = v;
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

#[test]
fn unique_map_first_write_wins() {
    let mut m: UniqueMap<String, i32> = UniqueMap::new();
    let (_, fresh) = m.insert("a".into(), 1);
    assert!(fresh);
    let (_, fresh) = m.insert("a".into(), 99);
    assert!(!fresh);
    assert_eq!(m.get("a"), Some(&1));

    let (_, fresh) = m.insert_or_assign("a".into(), 99);
    assert!(!fresh);
    assert_eq!(m.get("a"), Some(&99));
}

#[test]
fn absence_is_explicit_not_an_error() {
    let m: UniqueMap<String, i32> = [("x".to_string(), 1)].into_iter().collect();
    assert_eq!(m.find("missing"), m.end());
    assert_eq!(m.get("missing"), None);
    assert!(m.at("missing").is_err());
    assert_eq!(m.at("x"), Ok(&1));
}

#[test]
fn insertion_order_survives_rehash() {
    let mut m: UniqueMap<u32, u32, IdBuildHasher> = UniqueMap::with_hasher(IdBuildHasher);
    for k in [5, 3, 9, 1, 7, 2, 8, 4, 6, 0] {
        m.insert(k, k * 10);
    }
    let before: Vec<u32> = m.iter().map(|(k, _)| *k).collect();
    m.rehash(128);
    assert!(m.bucket_count() >= 128);
    let after: Vec<u32> = m.iter().map(|(k, _)| *k).collect();
    assert_eq!(before, after);
    assert_eq!(before, vec![5, 3, 9, 1, 7, 2, 8, 4, 6, 0]);
}

/// A map squeezed into two buckets must rehash before the load factor
/// would exceed 1.0, and every key stays reachable afterwards.
#[test]
fn overload_triggers_growth() {
    let mut m: UniqueMap<u32, u32, IdBuildHasher> =
        UniqueMap::with_bucket_count_and_hasher(2, IdBuildHasher);
    assert_eq!(m.bucket_count(), 2);
    m.insert(0, 0);
    m.insert(1, 1);
    assert_eq!(m.bucket_count(), 2);
    m.insert(2, 2);
    assert!(m.bucket_count() > 2);
    for k in 0..3 {
        assert_eq!(m.get(&k), Some(&k));
    }
    assert!(m.load_factor() <= m.max_load_factor());
}

#[test]
fn bucket_placement_is_modular() {
    let mut m: UniqueMap<u64, (), IdBuildHasher> = UniqueMap::with_hasher(IdBuildHasher);
    m.rehash(16);
    let n = m.bucket_count() as u64;
    for k in 0..40 {
        m.insert(k, ());
    }
    let n2 = m.bucket_count() as u64;
    for k in 0..40u64 {
        assert_eq!(m.bucket_of(&k) as u64, k % n2);
    }
    assert!(n2 >= n);
    let occupancy: usize = (0..m.bucket_count()).map(|b| m.bucket_size(b)).sum();
    assert_eq!(occupancy, m.len());
}

#[test]
fn lower_max_load_factor_grows_earlier() {
    let mut m: UniqueMap<u32, u32> = UniqueMap::with_bucket_count(8);
    m.set_max_load_factor(0.5);
    for k in 0..5 {
        m.insert(k, k);
    }
    // 5 entries over 8 buckets would be 0.625.
    assert!(m.bucket_count() > 8);
    assert!(m.load_factor() <= 0.5 + f64::EPSILON);
}

#[test]
fn reserve_prevents_intermediate_rehashes() {
    let mut m: UniqueMap<u32, u32> = UniqueMap::new();
    m.reserve(1000);
    let buckets = m.bucket_count();
    for k in 0..1000 {
        m.insert(k, k);
    }
    assert_eq!(m.bucket_count(), buckets);
}

#[test]
fn erase_at_returns_successor() {
    let mut m: UniqueMap<u32, u32> = (0..4u32).map(|k| (k, k)).collect();
    let c = m.find(&1);
    let ((k, _), after) = m.erase_at(c).unwrap();
    assert_eq!(k, 1);
    assert_eq!(m.pair_at(after).unwrap().0, 2);
    let keys: Vec<u32> = m.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![0, 2, 3]);
}

#[test]
fn multi_map_keeps_duplicates_in_order() {
    let mut m: MultiMap<&str, i32> = MultiMap::new();
    m.insert("k", 1);
    m.insert("other", 0);
    m.insert("k", 2);
    m.insert("k", 3);
    assert_eq!(m.count(&"k"), 3);

    let values: Vec<i32> = m
        .find_all(&"k")
        .into_iter()
        .map(|c| m.pair_at(c).unwrap().1)
        .collect();
    assert_eq!(values, vec![1, 2, 3]);

    assert_eq!(m.erase(&"k"), 3);
    assert_eq!(m.count(&"k"), 0);
    assert_eq!(m.len(), 1);
}

#[test]
fn map_merge_moves_entries() {
    let mut a: UniqueMap<u32, u32> = [(1, 10), (2, 20)].into_iter().collect();
    let mut b: UniqueMap<u32, u32> = [(2, 99), (3, 30)].into_iter().collect();
    a.merge(&mut b);
    assert!(b.is_empty());
    assert_eq!(a.len(), 3);
    // The existing mapping wins; the duplicate from `b` is dropped.
    assert_eq!(a.get(&2), Some(&20));
    assert_eq!(a.get(&3), Some(&30));
}

#[test]
fn multi_merge_keeps_everything() {
    let mut a: MultiMap<u32, u32> = MultiMap::new();
    a.insert(1, 10);
    let mut b: MultiMap<u32, u32> = MultiMap::new();
    b.insert(1, 11);
    b.insert(2, 20);
    a.merge(&mut b);
    assert!(b.is_empty());
    assert_eq!(a.count(&1), 2);
    assert_eq!(a.len(), 3);
}

#[test]
fn unique_set_rejects_duplicates() {
    let mut s: UniqueSet<String> = UniqueSet::new();
    assert!(s.insert("a".into()).1);
    assert!(!s.insert("a".into()).1);
    assert!(s.contains("a"));
    assert_eq!(s.len(), 1);
    assert_eq!(s.extract("a"), Some("a".to_string()));
    assert!(s.is_empty());
}

#[test]
fn multi_set_counts_multiplicity() {
    let mut s: MultiSet<i32> = MultiSet::new();
    for x in [1, 2, 1, 1] {
        s.insert(x);
    }
    assert_eq!(s.count(&1), 3);
    assert_eq!(s.count(&2), 1);
    assert_eq!(s.erase(&1), 3);
    assert_eq!(s.len(), 1);
}

#[test]
fn clear_keeps_bucket_array() {
    let mut m: UniqueMap<u32, u32> = (0..100u32).map(|k| (k, k)).collect();
    let buckets = m.bucket_count();
    m.clear();
    assert!(m.is_empty());
    assert_eq!(m.bucket_count(), buckets);
    m.insert(7, 7);
    assert_eq!(m.get(&7), Some(&7));
}
