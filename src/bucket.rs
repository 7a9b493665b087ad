//! Bucket engine: explicit separate-chaining index over element-list nodes.
//!
//! A bucket is an ordered vec of `{hash, node}` handles; an element lives in
//! bucket `hash mod bucket_count`. Every slot carries the hash computed at
//! insertion, so rehashing shuffles handles between buckets without ever
//! re-invoking `K: Hash` and without touching element storage. The array
//! only grows; erase empties bucket slots but never changes their count.
//!
//! Pure bookkeeping: no operation here can fail. Uniqueness, load-factor
//! policy and ownership all live a layer up in the hash core.

use slotmap::DefaultKey;

pub(crate) const DEFAULT_BUCKET_COUNT: usize = 8;

#[derive(Debug, Clone, Copy)]
pub(crate) struct BucketSlot {
    pub hash: u64,
    pub node: DefaultKey,
}

#[derive(Debug)]
pub(crate) struct BucketArray {
    buckets: Vec<Vec<BucketSlot>>,
}

impl BucketArray {
    /// `count` is used exactly as given (min 1); growth policy rounds up
    /// elsewhere, but explicit construction must honor small counts.
    pub fn with_bucket_count(count: usize) -> Self {
        let count = count.max(1);
        let mut buckets = Vec::with_capacity(count);
        buckets.resize_with(count, Vec::new);
        Self { buckets }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    pub fn bucket_size(&self, index: usize) -> usize {
        self.buckets.get(index).map(Vec::len).unwrap_or(0)
    }

    /// Handles in one bucket, in insertion order.
    pub fn bucket_nodes(&self, index: usize) -> impl Iterator<Item = DefaultKey> + '_ {
        self.buckets
            .get(index)
            .into_iter()
            .flat_map(|b| b.iter().map(|s| s.node))
    }

    /// First handle in `hash`'s bucket for which `matches` holds. In-bucket
    /// order is insertion order, so among equal keys this is the oldest.
    pub fn find(&self, hash: u64, mut matches: impl FnMut(DefaultKey) -> bool) -> Option<DefaultKey> {
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter()
            .find(|s| s.hash == hash && matches(s.node))
            .map(|s| s.node)
    }

    /// All matching handles in `hash`'s bucket, oldest first.
    pub fn find_all(
        &self,
        hash: u64,
        mut matches: impl FnMut(DefaultKey) -> bool,
    ) -> Vec<DefaultKey> {
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter()
            .filter(|s| s.hash == hash && matches(s.node))
            .map(|s| s.node)
            .collect()
    }

    /// Track a handle. The caller has already settled uniqueness and made
    /// room under the load factor.
    pub fn insert(&mut self, hash: u64, node: DefaultKey) {
        let index = self.bucket_index(hash);
        self.buckets[index].push(BucketSlot { hash, node });
    }

    /// Stop tracking a handle. Returns whether it was present.
    pub fn remove(&mut self, hash: u64, node: DefaultKey) -> bool {
        let index = self.bucket_index(hash);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|s| s.node == node) {
            Some(i) => {
                bucket.remove(i);
                true
            }
            None => false,
        }
    }

    /// Rebuild with at least `target` buckets (rounded up to a power of
    /// two), reassigning every tracked handle by its stored hash. Grows
    /// only; a target at or below the current count is a no-op.
    pub fn rehash(&mut self, target: usize) {
        let new_count = target.max(1).next_power_of_two();
        if new_count <= self.buckets.len() {
            return;
        }
        let old = core::mem::take(&mut self.buckets);
        self.buckets.resize_with(new_count, Vec::new);
        for slot in old.into_iter().flatten() {
            let index = self.bucket_index(slot.hash);
            self.buckets[index].push(slot);
        }
    }

    /// Empty every bucket, keeping the bucket array itself.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }
}
