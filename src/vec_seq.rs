//! VecSeq: contiguous storage with index cursors, the random-access path of
//! the cursor contract.
//!
//! Cursors are plain indices stamped with the container's owner id. Inserting
//! or erasing shifts later elements, so cursors at or after the mutation
//! point silently name different elements afterwards; that invalidation is
//! documented, not detected. Cursors never dangle past `end()` because every
//! minting path clamps to `len()`.

use crate::cursor::{AccessError, OwnerId, RandomAccess, Sequence, SequenceMut};

/// Position inside a [`VecSeq`]. `at == len` is the end sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct VecCursor {
    pub(crate) owner: OwnerId,
    pub(crate) at: usize,
}

/// Growable array implementing `Sequence + SequenceMut + RandomAccess`.
pub struct VecSeq<T> {
    owner: OwnerId,
    items: Vec<T>,
}

impl<T> VecSeq<T> {
    pub fn new() -> Self {
        Self {
            owner: OwnerId::mint(),
            items: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            owner: OwnerId::mint(),
            items: Vec::with_capacity(cap),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            owner: OwnerId::mint(),
            items,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn cursor(&self, at: usize) -> VecCursor {
        VecCursor {
            owner: self.owner,
            at: at.min(self.items.len()),
        }
    }

    /// Append, returning a cursor to the new element.
    pub fn push(&mut self, value: T) -> VecCursor {
        self.items.push(value);
        self.cursor(self.items.len() - 1)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Insert before `c` (before `end()` appends), returning a cursor to the
    /// inserted element. Cursors at or after `c` now name shifted elements.
    pub fn insert_at(&mut self, c: VecCursor, value: T) -> VecCursor {
        self.owner.check(c.owner);
        let at = c.at.min(self.items.len());
        self.items.insert(at, value);
        self.cursor(at)
    }

    /// Remove the element at `c`; `None` at `end()`. Cursors after `c` now
    /// name shifted elements.
    pub fn erase_at(&mut self, c: VecCursor) -> Option<T> {
        self.owner.check(c.owner);
        if c.at < self.items.len() {
            Some(self.items.remove(c.at))
        } else {
            None
        }
    }

    /// Bounds-checked indexed access.
    pub fn at(&self, i: usize) -> Result<&T, AccessError> {
        self.items.get(i).ok_or(AccessError::OutOfRange)
    }

    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, AccessError> {
        self.items.get_mut(i).ok_or(AccessError::OutOfRange)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for VecSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for VecSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for VecSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> Sequence for VecSeq<T> {
    type Item = T;
    type Cursor = VecCursor;

    fn begin(&self) -> VecCursor {
        self.cursor(0)
    }

    fn end(&self) -> VecCursor {
        self.cursor(self.items.len())
    }

    fn next(&self, c: VecCursor) -> VecCursor {
        self.owner.check(c.owner);
        self.cursor(c.at.saturating_add(1))
    }

    fn prev(&self, c: VecCursor) -> VecCursor {
        self.owner.check(c.owner);
        let len = self.items.len();
        if c.at == 0 || len == 0 {
            self.end()
        } else if c.at >= len {
            self.cursor(len - 1)
        } else {
            self.cursor(c.at - 1)
        }
    }

    fn get(&self, c: VecCursor) -> Option<&T> {
        self.owner.check(c.owner);
        self.items.get(c.at)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn advance(&self, c: VecCursor, n: usize) -> VecCursor {
        self.owner.check(c.owner);
        self.cursor(c.at.saturating_add(n))
    }

    fn distance(&self, first: VecCursor, last: VecCursor) -> usize {
        self.owner.check(first.owner);
        self.owner.check(last.owner);
        assert!(first.at <= last.at, "distance: last precedes first");
        last.at - first.at
    }
}

impl<T> SequenceMut for VecSeq<T> {
    fn get_mut(&mut self, c: VecCursor) -> Option<&mut T> {
        self.owner.check(c.owner);
        self.items.get_mut(c.at)
    }

    fn set(&mut self, c: VecCursor, value: T) -> Option<T> {
        self.owner.check(c.owner);
        self.items
            .get_mut(c.at)
            .map(|slot| core::mem::replace(slot, value))
    }

    fn swap(&mut self, a: VecCursor, b: VecCursor) {
        self.owner.check(a.owner);
        self.owner.check(b.owner);
        if a.at != b.at {
            self.items.swap(a.at, b.at);
        }
    }
}

impl<T> RandomAccess for VecSeq<T> {
    fn position(&self, c: VecCursor) -> usize {
        self.owner.check(c.owner);
        c.at.min(self.items.len())
    }

    fn at_offset(&self, i: usize) -> VecCursor {
        assert!(i <= self.items.len(), "at_offset past end");
        self.cursor(i)
    }
}
