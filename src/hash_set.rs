//! Hashed sets: unique and multi wrappers over the hash core with `()`
//! payloads. Iteration order is insertion order; traversal through the
//! cursor contract yields bare keys.

use crate::cursor::Sequence;
use crate::hash_core::HashCore;
use crate::node_list::ListCursor;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// Hash set holding each value at most once.
pub struct UniqueSet<K, S = RandomState> {
    core: HashCore<K, (), S>,
}

impl<K> UniqueSet<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            core: HashCore::new(),
        }
    }

    pub fn with_bucket_count(count: usize) -> Self {
        Self {
            core: HashCore::with_bucket_count(count),
        }
    }
}

impl<K> Default for UniqueSet<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> UniqueSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            core: HashCore::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Insert; `(existing position, false)` on a duplicate value.
    pub fn insert(&mut self, value: K) -> (ListCursor, bool) {
        self.core.insert_unique(value, ())
    }

    pub fn contains<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.contains(q)
    }

    /// Cursor to the element equal to `q`, or `end()` when absent.
    pub fn find<Q>(&self, q: &Q) -> ListCursor
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find_cursor(q).unwrap_or_else(|| self.end())
    }

    /// Remove the element equal to `q`; count removed (0 or 1).
    pub fn erase<Q>(&mut self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.erase_key(q)
    }

    /// Remove and return the stored value equal to `q`.
    pub fn extract<Q>(&mut self, q: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.extract(q).map(|(k, ())| k)
    }

    pub fn erase_at(&mut self, c: ListCursor) -> Option<(K, ListCursor)> {
        self.core
            .erase_cursor(c)
            .map(|((k, ()), after)| (k, after))
    }

    /// Move every element of `other` into `self`; values already present
    /// are dropped. `other` is left empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.core.merge(&mut other.core, true);
    }

    /// Batched insert with at most one rehash.
    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.core.extend_unique(items.into_iter().map(|k| (k, ())));
    }

    pub fn rehash(&mut self, bucket_count: usize) {
        self.core.rehash(bucket_count);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.core.reserve(additional);
    }

    pub fn bucket_count(&self) -> usize {
        self.core.bucket_count()
    }

    pub fn bucket_size(&self, index: usize) -> usize {
        self.core.bucket_size(index)
    }

    pub fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        self.core.bucket_of(q)
    }

    pub fn load_factor(&self) -> f64 {
        self.core.load_factor()
    }

    pub fn max_load_factor(&self) -> f64 {
        self.core.max_load_factor()
    }

    pub fn set_max_load_factor(&mut self, limit: f64) {
        self.core.set_max_load_factor(limit);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.core.iter_pairs().map(|(k, ())| k)
    }
}

impl<K, S> Sequence for UniqueSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = K;
    type Cursor = ListCursor;

    fn begin(&self) -> ListCursor {
        self.core.seq_begin()
    }

    fn end(&self) -> ListCursor {
        self.core.seq_end()
    }

    fn next(&self, c: ListCursor) -> ListCursor {
        self.core.seq_next(c)
    }

    fn prev(&self, c: ListCursor) -> ListCursor {
        self.core.seq_prev(c)
    }

    fn get(&self, c: ListCursor) -> Option<&K> {
        self.core.pair_at(c).map(|(k, _)| k)
    }

    fn len(&self) -> usize {
        self.core.len()
    }
}

impl<K> FromIterator<K> for UniqueSet<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Hash set keeping duplicates, in insertion order among equal values.
pub struct MultiSet<K, S = RandomState> {
    core: HashCore<K, (), S>,
}

impl<K> MultiSet<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            core: HashCore::new(),
        }
    }

    pub fn with_bucket_count(count: usize) -> Self {
        Self {
            core: HashCore::with_bucket_count(count),
        }
    }
}

impl<K> Default for MultiSet<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> MultiSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            core: HashCore::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Always inserts; duplicates are kept.
    pub fn insert(&mut self, value: K) -> ListCursor {
        self.core.insert_multi(value, ())
    }

    pub fn contains<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.contains(q)
    }

    /// Number of elements equal to `q`.
    pub fn count<Q>(&self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.count_key(q)
    }

    pub fn find<Q>(&self, q: &Q) -> ListCursor
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find_cursor(q).unwrap_or_else(|| self.end())
    }

    pub fn find_all<Q>(&self, q: &Q) -> Vec<ListCursor>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find_all_cursors(q)
    }

    /// Remove every element equal to `q`; count removed.
    pub fn erase<Q>(&mut self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.erase_key(q)
    }

    pub fn erase_at(&mut self, c: ListCursor) -> Option<(K, ListCursor)> {
        self.core
            .erase_cursor(c)
            .map(|((k, ()), after)| (k, after))
    }

    /// Move every element of `other` into `self` (duplicates included),
    /// leaving `other` empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.core.merge(&mut other.core, false);
    }

    /// Batched insert with at most one rehash.
    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.core.extend_multi(items.into_iter().map(|k| (k, ())));
    }

    pub fn rehash(&mut self, bucket_count: usize) {
        self.core.rehash(bucket_count);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.core.reserve(additional);
    }

    pub fn bucket_count(&self) -> usize {
        self.core.bucket_count()
    }

    pub fn bucket_size(&self, index: usize) -> usize {
        self.core.bucket_size(index)
    }

    pub fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        self.core.bucket_of(q)
    }

    pub fn load_factor(&self) -> f64 {
        self.core.load_factor()
    }

    pub fn max_load_factor(&self) -> f64 {
        self.core.max_load_factor()
    }

    pub fn set_max_load_factor(&mut self, limit: f64) {
        self.core.set_max_load_factor(limit);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.core.iter_pairs().map(|(k, ())| k)
    }
}

impl<K, S> Sequence for MultiSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = K;
    type Cursor = ListCursor;

    fn begin(&self) -> ListCursor {
        self.core.seq_begin()
    }

    fn end(&self) -> ListCursor {
        self.core.seq_end()
    }

    fn next(&self, c: ListCursor) -> ListCursor {
        self.core.seq_next(c)
    }

    fn prev(&self, c: ListCursor) -> ListCursor {
        self.core.seq_prev(c)
    }

    fn get(&self, c: ListCursor) -> Option<&K> {
        self.core.pair_at(c).map(|(k, _)| k)
    }

    fn len(&self) -> usize {
        self.core.len()
    }
}

impl<K> FromIterator<K> for MultiSet<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_rejects_duplicates() {
        let mut s: UniqueSet<String> = UniqueSet::new();
        let (c1, inserted) = s.insert("a".into());
        assert!(inserted);
        let (c2, inserted) = s.insert("a".into());
        assert!(!inserted);
        assert_eq!(c1, c2);
        assert_eq!(s.len(), 1);
        assert!(s.contains("a"));
        assert!(!s.contains("b"));
    }

    #[test]
    fn multi_counts_duplicates() {
        let mut s: MultiSet<i32> = MultiSet::new();
        s.insert(7);
        s.insert(7);
        s.insert(8);
        assert_eq!(s.count(&7), 2);
        assert_eq!(s.len(), 3);
        assert_eq!(s.erase(&7), 2);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn iteration_is_insertion_order() {
        let s: UniqueSet<i32> = [3, 1, 2].into_iter().collect();
        let got: Vec<i32> = s.iter().copied().collect();
        assert_eq!(got, vec![3, 1, 2]);
    }

    #[test]
    fn extract_returns_owned_value() {
        let mut s: UniqueSet<String> = ["x".to_string()].into_iter().collect();
        assert_eq!(s.extract("x"), Some("x".to_string()));
        assert_eq!(s.extract("x"), None);
    }

    #[test]
    fn merge_unique_discards_duplicates() {
        let mut a: UniqueSet<i32> = [1, 2].into_iter().collect();
        let mut b: UniqueSet<i32> = [2, 3].into_iter().collect();
        a.merge(&mut b);
        assert!(b.is_empty());
        let mut got: Vec<i32> = a.iter().copied().collect();
        got.sort_unstable();
        assert_eq!(got, vec![1, 2, 3]);
    }

    /// Invariant: erasing the sole element of a bucket leaves the bucket
    /// slot in place; only rehash changes bucket_count.
    #[test]
    fn erase_empties_bucket_but_keeps_slot() {
        let mut s: UniqueSet<i32> = UniqueSet::with_bucket_count(4);
        s.insert(11);
        let b = s.bucket_of(&11);
        assert_eq!(s.bucket_size(b), 1);
        assert_eq!(s.erase(&11), 1);
        assert_eq!(s.bucket_size(b), 0);
        assert_eq!(s.bucket_count(), 4);
    }
}
