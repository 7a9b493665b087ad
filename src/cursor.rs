//! The cursor contract: capability traits every sequence position satisfies.
//!
//! A cursor is a small `Copy + Eq` token naming one position inside its
//! owning container, with `end()` doubling as the single "no position"
//! sentinel. Containers mint cursors; algorithms consume them through the
//! traits below and never touch concrete storage.
//!
//! Sentinel rules, uniform across every implementation:
//! - `next(end) == end` — advancing past the last element saturates.
//! - `prev(begin) == end` — there is no distinct reverse sentinel.
//! - `advance` clamps at `end`; `distance(first, last)` requires `last` to be
//!   reachable from `first`.
//!
//! Two cursors compare equal iff they name the same position in the same
//! container instance. Every container carries a process-unique [`OwnerId`]
//! and stamps it into each cursor it mints; presenting a cursor to a
//! container that did not mint it is a programming error and panics.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Identity of one container instance, embedded in every cursor it mints.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OwnerId(u64);

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

impl OwnerId {
    pub(crate) fn mint() -> Self {
        OwnerId(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }

    /// Panics when `other` was minted by a different container.
    #[inline]
    pub(crate) fn check(self, other: OwnerId) {
        assert!(
            self == other,
            "cursor does not belong to this container (owner {:?}, cursor {:?})",
            self,
            other
        );
    }
}

/// Error raised by bounds-checked accessors (`at`); traversal never raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    OutOfRange,
}

/// Read-only traversal over one container's positions.
pub trait Sequence {
    type Item;
    type Cursor: Copy + Eq + fmt::Debug;

    /// Cursor at the first element, or `end()` when empty.
    fn begin(&self) -> Self::Cursor;

    /// The one-past-the-last sentinel.
    fn end(&self) -> Self::Cursor;

    /// Cursor one position after `c`; `end()` saturates.
    fn next(&self, c: Self::Cursor) -> Self::Cursor;

    /// Cursor one position before `c`; `prev(begin())` and `prev` on an
    /// empty container yield `end()`. `prev(end())` names the last element.
    fn prev(&self, c: Self::Cursor) -> Self::Cursor;

    /// Value at `c`, or `None` at `end()` or for a stale cursor.
    fn get(&self, c: Self::Cursor) -> Option<&Self::Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `n` steps forward, clamped at `end()`. The default walks one step at
    /// a time; random-access containers override with index arithmetic.
    fn advance(&self, c: Self::Cursor, n: usize) -> Self::Cursor {
        let mut c = c;
        let end = self.end();
        let mut left = n;
        while left > 0 && c != end {
            c = self.next(c);
            left -= 1;
        }
        c
    }

    /// Number of steps from `first` to `last`. O(1) for random-access
    /// containers, O(n) otherwise. `last` must be reachable from `first`.
    fn distance(&self, first: Self::Cursor, last: Self::Cursor) -> usize {
        let mut c = first;
        let end = self.end();
        let mut n = 0;
        while c != last {
            assert!(c != end, "distance: last is not reachable from first");
            c = self.next(c);
            n += 1;
        }
        n
    }
}

/// Write access through cursors.
pub trait SequenceMut: Sequence {
    /// Mutable value at `c`, or `None` at `end()` or for a stale cursor.
    fn get_mut(&mut self, c: Self::Cursor) -> Option<&mut Self::Item>;

    /// Write `value` through `c`, returning the previous value. `None` when
    /// the cursor names no live element; nothing is stored in that case.
    fn set(&mut self, c: Self::Cursor, value: Self::Item) -> Option<Self::Item>;

    /// Exchange the values at two positions. No-op when `a == b`.
    fn swap(&mut self, a: Self::Cursor, b: Self::Cursor);
}

/// O(1) cursor/index conversion for array-backed sequences. Implementations
/// also override [`Sequence::advance`] and [`Sequence::distance`].
pub trait RandomAccess: Sequence {
    /// Index of `c` from the front; `end()` maps to `len()`.
    fn position(&self, c: Self::Cursor) -> usize;

    /// Cursor at index `i`; `i == len()` is `end()`. Panics past that.
    fn at_offset(&self, i: usize) -> Self::Cursor;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_ids_are_unique() {
        let a = OwnerId::mint();
        let b = OwnerId::mint();
        assert_ne!(a, b);
    }

    #[test]
    fn owner_check_accepts_self() {
        let a = OwnerId::mint();
        a.check(a);
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn owner_check_rejects_foreign() {
        let a = OwnerId::mint();
        let b = OwnerId::mint();
        a.check(b);
    }
}
