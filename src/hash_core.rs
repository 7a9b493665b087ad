//! Shared core of the hashed containers: an owning, insertion-ordered
//! element list plus a non-owning bucket index.
//!
//! Each stored slot is the `(key, value)` pair and the hash computed at
//! insertion; the bucket engine only ever sees node keys and stored hashes,
//! so `K: Hash` runs exactly once per element per hasher. The element list
//! is the authoritative owner: erasure unlinks the bucket handle first and
//! removes from the list last, so user code running in drops observes a
//! consistent structure.
//!
//! Load-factor policy: before any insertion that would push
//! `len / bucket_count` over `max_load_factor` (default 1.0), the bucket
//! array is rehashed to at least `len * 2` buckets. Batched insertion sizes
//! the array once up front, so a whole batch performs at most one rehash.

use crate::bucket::{BucketArray, DEFAULT_BUCKET_COUNT};
use crate::node_list::{ListCursor, NodeList};
use crate::reentry::ReentryFlag;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use slotmap::DefaultKey;
use std::collections::hash_map::RandomState;

pub(crate) const DEFAULT_MAX_LOAD_FACTOR: f64 = 1.0;
pub(crate) const GROWTH_FACTOR: usize = 2;

#[derive(Debug)]
pub(crate) struct Slot<K, V> {
    pub pair: (K, V),
    pub hash: u64,
}

pub(crate) struct HashCore<K, V, S = RandomState> {
    hasher: S,
    entries: NodeList<Slot<K, V>>,
    buckets: BucketArray,
    max_load_factor: f64,
    reentry: ReentryFlag,
}

impl<K, V> HashCore<K, V, RandomState>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(RandomState::default())
    }

    pub fn with_bucket_count(count: usize) -> Self {
        Self::with_bucket_count_and_hasher(count, RandomState::default())
    }
}

impl<K, V, S> HashCore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_bucket_count_and_hasher(DEFAULT_BUCKET_COUNT, hasher)
    }

    /// The bucket count is honored exactly, which keeps small, fully
    /// observable tables constructible.
    pub fn with_bucket_count_and_hasher(count: usize, hasher: S) -> Self {
        Self {
            hasher,
            entries: NodeList::new(),
            buckets: BucketArray::with_bucket_count(count),
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            reentry: ReentryFlag::new(),
        }
    }

    fn hash_of<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Unguarded probe; callers hold the reentry guard.
    fn find_node<Q>(&self, hash: u64, q: &Q) -> Option<DefaultKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.buckets.find(hash, |node| {
            self.entries
                .value_of(node)
                .map(|s| s.pair.0.borrow() == q)
                .unwrap_or(false)
        })
    }

    // The mutating helpers below take the list and bucket fields directly
    // rather than `&mut self`: callers hold the reentry guard, which borrows
    // `self.reentry` for the rest of the scope, so only disjoint field
    // borrows are available to them.

    fn ensure_capacity(
        entries: &NodeList<Slot<K, V>>,
        buckets: &mut BucketArray,
        max_load_factor: f64,
        additional: usize,
    ) {
        let needed = entries.len() + additional;
        if needed as f64 > max_load_factor * buckets.bucket_count() as f64 {
            buckets.rehash(needed.saturating_mul(GROWTH_FACTOR));
        }
    }

    // Unguarded insert; capacity and uniqueness already settled.
    fn link_new(
        entries: &mut NodeList<Slot<K, V>>,
        buckets: &mut BucketArray,
        key: K,
        value: V,
        hash: u64,
    ) -> ListCursor {
        let c = entries.push_back(Slot {
            pair: (key, value),
            hash,
        });
        let node = c.node.expect("push_back yields a live cursor");
        buckets.insert(hash, node);
        c
    }

    // Unguarded erase: bucket unlink first, authoritative list removal last.
    fn unlink(
        entries: &mut NodeList<Slot<K, V>>,
        buckets: &mut BucketArray,
        node: DefaultKey,
    ) -> Option<((K, V), ListCursor)> {
        let hash = entries.value_of(node)?.hash;
        buckets.remove(hash, node);
        let cursor = entries.cursor_for(Some(node));
        entries.erase(cursor).map(|(s, after)| (s.pair, after))
    }

    pub fn find_cursor<Q>(&self, q: &Q) -> Option<ListCursor>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        self.find_node(hash, q)
            .map(|node| self.entries.cursor_for(Some(node)))
    }

    /// Cursors to every element with key `q`, insertion order.
    pub fn find_all_cursors<Q>(&self, q: &Q) -> Vec<ListCursor>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        self.buckets
            .find_all(hash, |node| {
                self.entries
                    .value_of(node)
                    .map(|s| s.pair.0.borrow() == q)
                    .unwrap_or(false)
            })
            .into_iter()
            .map(|node| self.entries.cursor_for(Some(node)))
            .collect()
    }

    pub fn contains<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        self.find_node(hash, q).is_some()
    }

    pub fn count_key<Q>(&self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        self.buckets
            .find_all(hash, |node| {
                self.entries
                    .value_of(node)
                    .map(|s| s.pair.0.borrow() == q)
                    .unwrap_or(false)
            })
            .len()
    }

    pub fn value<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        let node = self.find_node(hash, q)?;
        self.entries.value_of(node).map(|s| &s.pair.1)
    }

    pub fn value_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        let node = self.find_node(hash, q)?;
        self.entries.value_of_mut(node).map(|s| &mut s.pair.1)
    }

    /// Unique-keyed insert: a duplicate key is a no-op returning the
    /// existing position with `false`. First write wins.
    pub fn insert_unique(&mut self, key: K, value: V) -> (ListCursor, bool) {
        let _g = self.reentry.enter();
        let hash = self.hash_of(&key);
        if let Some(node) = self.find_node(hash, &key) {
            return (self.entries.cursor_for(Some(node)), false);
        }
        Self::ensure_capacity(&self.entries, &mut self.buckets, self.max_load_factor, 1);
        let c = Self::link_new(&mut self.entries, &mut self.buckets, key, value, hash);
        (c, true)
    }

    /// Multi insert: always creates a new element, appended after any
    /// existing elements with the same key.
    pub fn insert_multi(&mut self, key: K, value: V) -> ListCursor {
        let _g = self.reentry.enter();
        let hash = self.hash_of(&key);
        Self::ensure_capacity(&self.entries, &mut self.buckets, self.max_load_factor, 1);
        Self::link_new(&mut self.entries, &mut self.buckets, key, value, hash)
    }

    /// Find-or-insert, replacing the mapped value when the key exists.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (ListCursor, bool) {
        let _g = self.reentry.enter();
        let hash = self.hash_of(&key);
        if let Some(node) = self.find_node(hash, &key) {
            if let Some(slot) = self.entries.value_of_mut(node) {
                slot.pair.1 = value;
            }
            return (self.entries.cursor_for(Some(node)), false);
        }
        Self::ensure_capacity(&self.entries, &mut self.buckets, self.max_load_factor, 1);
        let c = Self::link_new(&mut self.entries, &mut self.buckets, key, value, hash);
        (c, true)
    }

    /// Remove every element with key `q`; returns how many were removed.
    pub fn erase_key<Q>(&mut self, q: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        let nodes = self.buckets.find_all(hash, |node| {
            self.entries
                .value_of(node)
                .map(|s| s.pair.0.borrow() == q)
                .unwrap_or(false)
        });
        for &node in &nodes {
            let _ = Self::unlink(&mut self.entries, &mut self.buckets, node);
        }
        nodes.len()
    }

    /// Remove the element at `c`, returning its pair and the cursor after it.
    pub fn erase_cursor(&mut self, c: ListCursor) -> Option<((K, V), ListCursor)> {
        let _g = self.reentry.enter();
        self.entries.check_owner(c);
        let node = c.node?;
        Self::unlink(&mut self.entries, &mut self.buckets, node)
    }

    /// Remove and return one element with key `q`.
    pub fn extract<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.enter();
        let hash = self.hash_of(q);
        let node = self.find_node(hash, q)?;
        Self::unlink(&mut self.entries, &mut self.buckets, node).map(|(pair, _)| pair)
    }

    /// Batched unique insert: one capacity decision for the whole batch, so
    /// at most one rehash regardless of batch size.
    pub fn extend_unique<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let _g = self.reentry.enter();
        let items: Vec<(K, V)> = items.into_iter().collect();
        Self::ensure_capacity(
            &self.entries,
            &mut self.buckets,
            self.max_load_factor,
            items.len(),
        );
        for (key, value) in items {
            let hash = self.hash_of(&key);
            if self.find_node(hash, &key).is_none() {
                Self::link_new(&mut self.entries, &mut self.buckets, key, value, hash);
            }
        }
    }

    /// Batched multi insert; same single-rehash guarantee.
    pub fn extend_multi<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let _g = self.reentry.enter();
        let items: Vec<(K, V)> = items.into_iter().collect();
        Self::ensure_capacity(
            &self.entries,
            &mut self.buckets,
            self.max_load_factor,
            items.len(),
        );
        for (key, value) in items {
            let hash = self.hash_of(&key);
            Self::link_new(&mut self.entries, &mut self.buckets, key, value, hash);
        }
    }

    /// Move every element of `other` into `self`, leaving `other` empty.
    /// With `unique`, elements whose key is already present are dropped.
    /// Hashes are recomputed under `self`'s hasher.
    pub fn merge(&mut self, other: &mut Self, unique: bool) {
        let _g = self.reentry.enter();
        let _g2 = other.reentry.enter();
        other.buckets.clear();
        while let Some(slot) = other.entries.pop_front() {
            let (key, value) = slot.pair;
            let hash = self.hash_of(&key);
            if unique && self.find_node(hash, &key).is_some() {
                continue;
            }
            Self::ensure_capacity(&self.entries, &mut self.buckets, self.max_load_factor, 1);
            Self::link_new(&mut self.entries, &mut self.buckets, key, value, hash);
        }
    }

    /// Grow the bucket array to at least `count` buckets (and at least
    /// enough for the current load factor). Content and element identity are
    /// untouched; only bucket grouping changes.
    pub fn rehash(&mut self, count: usize) {
        let floor = (self.entries.len() as f64 / self.max_load_factor).ceil() as usize;
        self.buckets.rehash(count.max(floor));
    }

    /// Make room for at least `additional_elements` without a further rehash.
    pub fn reserve(&mut self, additional_elements: usize) {
        let total = self.entries.len() + additional_elements;
        let needed = (total as f64 / self.max_load_factor).ceil() as usize;
        self.buckets.rehash(needed);
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.bucket_count()
    }

    pub fn bucket_size(&self, index: usize) -> usize {
        self.buckets.bucket_size(index)
    }

    /// Bucket an element with key `q` would occupy.
    pub fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        self.buckets.bucket_index(self.hash_of(q))
    }

    /// Pairs in one bucket, oldest first.
    pub fn bucket_pairs(&self, index: usize) -> impl Iterator<Item = &(K, V)> {
        self.buckets
            .bucket_nodes(index)
            .filter_map(|node| self.entries.value_of(node).map(|s| &s.pair))
    }

    pub fn load_factor(&self) -> f64 {
        self.entries.len() as f64 / self.buckets.bucket_count() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Takes effect at the next insertion; no immediate rehash.
    pub fn set_max_load_factor(&mut self, limit: f64) {
        assert!(limit > 0.0, "max load factor must be positive");
        self.max_load_factor = limit;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
    }

    pub fn iter_pairs(&self) -> impl Iterator<Item = &(K, V)> {
        self.entries.iter().map(|s| &s.pair)
    }

    // Sequence plumbing for the public wrappers.

    pub fn seq_begin(&self) -> ListCursor {
        crate::cursor::Sequence::begin(&self.entries)
    }

    pub fn seq_end(&self) -> ListCursor {
        crate::cursor::Sequence::end(&self.entries)
    }

    pub fn seq_next(&self, c: ListCursor) -> ListCursor {
        crate::cursor::Sequence::next(&self.entries, c)
    }

    pub fn seq_prev(&self, c: ListCursor) -> ListCursor {
        crate::cursor::Sequence::prev(&self.entries, c)
    }

    pub fn pair_at(&self, c: ListCursor) -> Option<&(K, V)> {
        crate::cursor::Sequence::get(&self.entries, c).map(|s| &s.pair)
    }

    pub fn value_at_mut(&mut self, c: ListCursor) -> Option<&mut V> {
        crate::cursor::SequenceMut::get_mut(&mut self.entries, c).map(|s| &mut s.pair.1)
    }
}
