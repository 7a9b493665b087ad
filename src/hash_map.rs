//! Hashed maps: unique-keyed and multi-keyed wrappers over the hash core.
//!
//! Both iterate in insertion order through the cursor contract (`Sequence`,
//! read-only; keys are immutable once stored, so maps expose no
//! `SequenceMut`). Lookup misses come back as `end()` from `find` and as
//! `None`/`0` from the value accessors; only `at` raises.

use crate::cursor::{AccessError, Sequence};
use crate::hash_core::HashCore;
use crate::node_list::ListCursor;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// Hash map with at most one element per key. Inserting a duplicate key is
/// a no-op returning the existing position: first write wins.
pub struct UniqueMap<K, V, S = RandomState> {
    core: HashCore<K, V, S>,
}

impl<K, V> UniqueMap<K, V>
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

impl<K, V> Default for UniqueMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> UniqueMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            core: HashCore::with_hasher(hasher),
        }
    }

    pub fn with_bucket_count_and_hasher(count: usize, hasher: S) -> Self {
        Self {
            core: HashCore::with_bucket_count_and_hasher(count, hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Insert; `(existing position, false)` on a duplicate key.
    pub fn insert(&mut self, key: K, value: V) -> (ListCursor, bool) {
        self.core.insert_unique(key, value)
    }

    /// Insert, or replace the mapped value of an existing key.
    /// Returns `true` when a new element was created.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (ListCursor, bool) {
        self.core.insert_or_assign(key, value)
    }

    /// Remove and return the element with key `q`.
    pub fn extract<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.extract(q)
    }

    /// Cursor to the element with key `q`, or `end()` when absent.
    pub fn find<Q>(&self, q: &Q) -> ListCursor
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find_cursor(q).unwrap_or_else(|| self.end())
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.contains(q)
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.value(q)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.value_mut(q)
    }

    /// Checked access: absent key raises instead of returning a sentinel.
    pub fn at<Q>(&self, q: &Q) -> Result<&V, AccessError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.value(q).ok_or(AccessError::OutOfRange)
    }

    /// Remove the element with key `q`; count removed (0 or 1).
    pub fn erase<Q>(&mut self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.erase_key(q)
    }

    /// Remove the element at `c`, returning its pair and the cursor after.
    pub fn erase_at(&mut self, c: ListCursor) -> Option<((K, V), ListCursor)> {
        self.core.erase_cursor(c)
    }

    /// Entry behind a cursor. Equivalent to `Sequence::get`, kept inherent
    /// because `get` here is the key-based accessor.
    pub fn pair_at(&self, c: ListCursor) -> Option<&(K, V)> {
        self.core.pair_at(c)
    }

    /// Mapped value behind a cursor, mutable. Keys stay immutable.
    pub fn value_at_mut(&mut self, c: ListCursor) -> Option<&mut V> {
        self.core.value_at_mut(c)
    }

    /// Move every element of `other` into `self`; elements whose key is
    /// already present are dropped. `other` is left empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.core.merge(&mut other.core, true);
    }

    /// Batched insert: the bucket array is sized once for the whole batch,
    /// so at most one rehash happens.
    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.core.extend_unique(items);
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

    /// Entries of one bucket, oldest first.
    pub fn bucket_iter(&self, index: usize) -> impl Iterator<Item = (&K, &V)> {
        self.core.bucket_pairs(index).map(|(k, v)| (k, v))
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

    /// Insertion-order iteration.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.core.iter_pairs().map(|(k, v)| (k, v))
    }
}

impl<K, V, S> Sequence for UniqueMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (K, V);
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

    fn get(&self, c: ListCursor) -> Option<&(K, V)> {
        self.core.pair_at(c)
    }

    fn len(&self) -> usize {
        self.core.len()
    }
}

impl<K, V> FromIterator<(K, V)> for UniqueMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// Hash map allowing any number of elements per key, kept in insertion
/// order among equal keys.
pub struct MultiMap<K, V, S = RandomState> {
    core: HashCore<K, V, S>,
}

impl<K, V> MultiMap<K, V>
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

impl<K, V> Default for MultiMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> MultiMap<K, V, S>
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

    /// Always creates a new element; duplicates are kept.
    pub fn insert(&mut self, key: K, value: V) -> ListCursor {
        self.core.insert_multi(key, value)
    }

    /// Cursor to the oldest element with key `q`, or `end()` when absent.
    pub fn find<Q>(&self, q: &Q) -> ListCursor
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find_cursor(q).unwrap_or_else(|| self.end())
    }

    /// Cursors to every element with key `q`, oldest first.
    pub fn find_all<Q>(&self, q: &Q) -> Vec<ListCursor>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find_all_cursors(q)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.contains(q)
    }

    /// Number of elements with key `q`.
    pub fn count<Q>(&self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.count_key(q)
    }

    /// Remove every element with key `q`; count removed.
    pub fn erase<Q>(&mut self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.erase_key(q)
    }

    pub fn erase_at(&mut self, c: ListCursor) -> Option<((K, V), ListCursor)> {
        self.core.erase_cursor(c)
    }

    /// Entry behind a cursor. Equivalent to `Sequence::get`, kept inherent
    /// because `get` would shadow the key-based accessors.
    pub fn pair_at(&self, c: ListCursor) -> Option<&(K, V)> {
        self.core.pair_at(c)
    }

    pub fn value_at_mut(&mut self, c: ListCursor) -> Option<&mut V> {
        self.core.value_at_mut(c)
    }

    /// Move every element of `other` into `self` (duplicates included),
    /// leaving `other` empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.core.merge(&mut other.core, false);
    }

    /// Batched insert with at most one rehash.
    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.core.extend_multi(items);
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

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.core.iter_pairs().map(|(k, v)| (k, v))
    }
}

impl<K, V, S> Sequence for MultiMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (K, V);
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

    fn get(&self, c: ListCursor) -> Option<&(K, V)> {
        self.core.pair_at(c)
    }

    fn len(&self) -> usize {
        self.core.len()
    }
}

impl<K, V> FromIterator<(K, V)> for MultiMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
