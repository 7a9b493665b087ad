//! DequeSeq: double-ended queue with logical-index cursors.
//!
//! Same cursor scheme as `VecSeq` (index stamped with the owner id), so the
//! random-access fast path applies. `push_front`/`pop_front` shift every
//! logical index by one; cursors held across front mutations name different
//! elements afterwards. Documented, not detected.

use crate::cursor::{AccessError, OwnerId, RandomAccess, Sequence, SequenceMut};
use std::collections::VecDeque;

/// Position inside a [`DequeSeq`]. `at == len` is the end sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DequeCursor {
    pub(crate) owner: OwnerId,
    pub(crate) at: usize,
}

/// Double-ended sequence implementing `Sequence + SequenceMut + RandomAccess`.
pub struct DequeSeq<T> {
    owner: OwnerId,
    items: VecDeque<T>,
}

impl<T> DequeSeq<T> {
    pub fn new() -> Self {
        Self {
            owner: OwnerId::mint(),
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn cursor(&self, at: usize) -> DequeCursor {
        DequeCursor {
            owner: self.owner,
            at: at.min(self.items.len()),
        }
    }

    pub fn push_back(&mut self, value: T) -> DequeCursor {
        self.items.push_back(value);
        self.cursor(self.items.len() - 1)
    }

    /// Prepend; every existing logical index shifts up by one.
    pub fn push_front(&mut self, value: T) -> DequeCursor {
        self.items.push_front(value);
        self.cursor(0)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
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

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for DequeSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DequeSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            owner: OwnerId::mint(),
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Sequence for DequeSeq<T> {
    type Item = T;
    type Cursor = DequeCursor;

    fn begin(&self) -> DequeCursor {
        self.cursor(0)
    }

    fn end(&self) -> DequeCursor {
        self.cursor(self.items.len())
    }

    fn next(&self, c: DequeCursor) -> DequeCursor {
        self.owner.check(c.owner);
        self.cursor(c.at.saturating_add(1))
    }

    fn prev(&self, c: DequeCursor) -> DequeCursor {
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

    fn get(&self, c: DequeCursor) -> Option<&T> {
        self.owner.check(c.owner);
        self.items.get(c.at)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn advance(&self, c: DequeCursor, n: usize) -> DequeCursor {
        self.owner.check(c.owner);
        self.cursor(c.at.saturating_add(n))
    }

    fn distance(&self, first: DequeCursor, last: DequeCursor) -> usize {
        self.owner.check(first.owner);
        self.owner.check(last.owner);
        assert!(first.at <= last.at, "distance: last precedes first");
        last.at - first.at
    }
}

impl<T> SequenceMut for DequeSeq<T> {
    fn get_mut(&mut self, c: DequeCursor) -> Option<&mut T> {
        self.owner.check(c.owner);
        self.items.get_mut(c.at)
    }

    fn set(&mut self, c: DequeCursor, value: T) -> Option<T> {
        self.owner.check(c.owner);
        self.items
            .get_mut(c.at)
            .map(|slot| core::mem::replace(slot, value))
    }

    fn swap(&mut self, a: DequeCursor, b: DequeCursor) {
        self.owner.check(a.owner);
        self.owner.check(b.owner);
        if a.at != b.at {
            self.items.swap(a.at, b.at);
        }
    }
}

impl<T> RandomAccess for DequeSeq<T> {
    fn position(&self, c: DequeCursor) -> usize {
        self.owner.check(c.owner);
        c.at.min(self.items.len())
    }

    fn at_offset(&self, i: usize) -> DequeCursor {
        assert!(i <= self.items.len(), "at_offset past end");
        self.cursor(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_both_ends_and_traverse() {
        let mut d = DequeSeq::new();
        d.push_back(2);
        d.push_back(3);
        d.push_front(1);
        let collected: Vec<i32> = d.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);

        let mut c = d.begin();
        let mut walked = Vec::new();
        while c != d.end() {
            walked.push(*d.get(c).unwrap());
            c = d.next(c);
        }
        assert_eq!(walked, vec![1, 2, 3]);
    }

    #[test]
    fn sentinel_rules_match_vec_seq() {
        let d: DequeSeq<i32> = [1, 2].into_iter().collect();
        assert_eq!(d.next(d.end()), d.end());
        assert_eq!(d.prev(d.begin()), d.end());
        assert_eq!(d.get(d.prev(d.end())), Some(&2));
    }

    #[test]
    fn at_raises_out_of_range() {
        let d: DequeSeq<i32> = [1].into_iter().collect();
        assert_eq!(d.at(0), Ok(&1));
        assert_eq!(d.at(3), Err(AccessError::OutOfRange));
    }
}
