//! NodeList: insertion-ordered doubly-linked list over a slotmap arena.
//!
//! Nodes live in a `SlotMap` with generational keys, so a cursor to an
//! erased element goes inert instead of aliasing whatever reuses the slot.
//! Links give O(1) insert and erase at a cursor and only the erased
//! element's cursors are invalidated.
//!
//! This is the bidirectional-only end of the cursor contract: `advance` and
//! `distance` fall back to the defaulted one-step walk. It also serves as
//! the owning element storage of the hashed containers, which hold bare node
//! keys into the arena and never own elements themselves.

use crate::cursor::{OwnerId, Sequence, SequenceMut};
use slotmap::{DefaultKey, SlotMap};

/// Position inside a [`NodeList`]. `node == None` is the end sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ListCursor {
    pub(crate) owner: OwnerId,
    pub(crate) node: Option<DefaultKey>,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

pub struct NodeList<T> {
    owner: OwnerId,
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        Self {
            owner: OwnerId::mint(),
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn check_owner(&self, c: ListCursor) {
        self.owner.check(c.owner);
    }

    pub(crate) fn cursor_for(&self, node: Option<DefaultKey>) -> ListCursor {
        ListCursor {
            owner: self.owner,
            node,
        }
    }

    pub(crate) fn value_of(&self, key: DefaultKey) -> Option<&T> {
        self.nodes.get(key).map(|n| &n.value)
    }

    pub(crate) fn value_of_mut(&mut self, key: DefaultKey) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|n| &mut n.value)
    }

    /// Append, returning a cursor to the new element.
    pub fn push_back(&mut self, value: T) -> ListCursor {
        let key = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.cursor_for(Some(key))
    }

    /// Prepend, returning a cursor to the new element.
    pub fn push_front(&mut self, value: T) -> ListCursor {
        let key = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(h) => self.nodes[h].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.cursor_for(Some(key))
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.erase(self.cursor_for(Some(head))).map(|(v, _)| v)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.erase(self.cursor_for(Some(tail))).map(|(v, _)| v)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|k| self.value_of(k))
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|k| self.value_of(k))
    }

    /// Insert before `c` (before `end()` appends), returning a cursor to the
    /// inserted element. No other cursor is disturbed.
    pub fn insert_before(&mut self, c: ListCursor, value: T) -> ListCursor {
        self.owner.check(c.owner);
        let Some(at) = c.node else {
            return self.push_back(value);
        };
        if self.nodes.get(at).is_none() {
            // Stale position: treat like end.
            return self.push_back(value);
        }
        let before = self.nodes[at].prev;
        let key = self.nodes.insert(Node {
            value,
            prev: before,
            next: Some(at),
        });
        self.nodes[at].prev = Some(key);
        match before {
            Some(b) => self.nodes[b].next = Some(key),
            None => self.head = Some(key),
        }
        self.cursor_for(Some(key))
    }

    /// Remove the element at `c`, returning its value and the cursor after
    /// it. `None` at `end()` or for a stale cursor; only cursors to the
    /// erased element are invalidated.
    pub fn erase(&mut self, c: ListCursor) -> Option<(T, ListCursor)> {
        self.owner.check(c.owner);
        let key = c.node?;
        let node = self.nodes.remove(key)?;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some((node.value, self.cursor_for(node.next)))
    }

    /// Drain every element of `other` onto the back of `self`, preserving
    /// `other`'s order. `other` is left empty.
    pub fn append(&mut self, other: &mut NodeList<T>) {
        while let Some(v) = other.pop_front() {
            self.push_back(v);
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Link-order iteration (insertion order), front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
        }
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for v in iter {
            list.push_back(v);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a NodeList<T>,
    cur: Option<DefaultKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let key = self.cur?;
        let node = self.list.nodes.get(key)?;
        self.cur = node.next;
        Some(&node.value)
    }
}

impl<T> Sequence for NodeList<T> {
    type Item = T;
    type Cursor = ListCursor;

    fn begin(&self) -> ListCursor {
        self.cursor_for(self.head)
    }

    fn end(&self) -> ListCursor {
        self.cursor_for(None)
    }

    fn next(&self, c: ListCursor) -> ListCursor {
        self.owner.check(c.owner);
        match c.node.and_then(|k| self.nodes.get(k)) {
            Some(node) => self.cursor_for(node.next),
            None => self.end(),
        }
    }

    fn prev(&self, c: ListCursor) -> ListCursor {
        self.owner.check(c.owner);
        match c.node {
            None => self.cursor_for(self.tail),
            Some(k) => match self.nodes.get(k).and_then(|n| n.prev) {
                Some(p) => self.cursor_for(Some(p)),
                None => self.end(),
            },
        }
    }

    fn get(&self, c: ListCursor) -> Option<&T> {
        self.owner.check(c.owner);
        c.node.and_then(|k| self.value_of(k))
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> SequenceMut for NodeList<T> {
    fn get_mut(&mut self, c: ListCursor) -> Option<&mut T> {
        self.owner.check(c.owner);
        c.node.and_then(|k| self.value_of_mut(k))
    }

    fn set(&mut self, c: ListCursor, value: T) -> Option<T> {
        self.owner.check(c.owner);
        c.node
            .and_then(|k| self.value_of_mut(k))
            .map(|slot| core::mem::replace(slot, value))
    }

    fn swap(&mut self, a: ListCursor, b: ListCursor) {
        self.owner.check(a.owner);
        self.owner.check(b.owner);
        let (Some(ka), Some(kb)) = (a.node, b.node) else {
            return;
        };
        if ka == kb {
            return;
        }
        if let Some([na, nb]) = self.nodes.get_disjoint_mut([ka, kb]) {
            core::mem::swap(&mut na.value, &mut nb.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(l: &NodeList<T>) -> Vec<T> {
        l.iter().cloned().collect()
    }

    #[test]
    fn push_pop_preserve_order() {
        let mut l = NodeList::new();
        l.push_back(2);
        l.push_back(3);
        l.push_front(1);
        assert_eq!(collect(&l), vec![1, 2, 3]);
        assert_eq!(l.pop_front(), Some(1));
        assert_eq!(l.pop_back(), Some(3));
        assert_eq!(collect(&l), vec![2]);
    }

    #[test]
    fn insert_before_links_correctly() {
        let mut l: NodeList<i32> = [1, 3].into_iter().collect();
        let c3 = l.next(l.begin());
        let c2 = l.insert_before(c3, 2);
        assert_eq!(collect(&l), vec![1, 2, 3]);
        assert_eq!(l.get(c2), Some(&2));
        // Before end() appends.
        l.insert_before(l.end(), 4);
        assert_eq!(collect(&l), vec![1, 2, 3, 4]);
    }

    /// Invariant: erasing invalidates only the erased element's cursor, and
    /// the stale cursor goes inert rather than aliasing reused storage.
    #[test]
    fn erase_invalidates_only_that_cursor() {
        let mut l: NodeList<i32> = [1, 2, 3].into_iter().collect();
        let c1 = l.begin();
        let c2 = l.next(c1);
        let c3 = l.next(c2);

        let (v, after) = l.erase(c2).unwrap();
        assert_eq!(v, 2);
        assert_eq!(after, c3);
        assert_eq!(l.get(c1), Some(&1));
        assert_eq!(l.get(c3), Some(&3));
        assert_eq!(l.get(c2), None);
        assert_eq!(l.erase(c2), None);

        // Slot reuse must not resurrect the stale cursor.
        l.push_back(9);
        assert_eq!(l.get(c2), None);
    }

    #[test]
    fn sentinel_rules() {
        let l: NodeList<i32> = [1, 2].into_iter().collect();
        assert_eq!(l.next(l.end()), l.end());
        assert_eq!(l.prev(l.begin()), l.end());
        assert_eq!(l.get(l.prev(l.end())), Some(&2));

        let empty: NodeList<i32> = NodeList::new();
        assert_eq!(empty.begin(), empty.end());
        assert_eq!(empty.prev(empty.end()), empty.end());
    }

    #[test]
    fn default_walk_advance_distance() {
        let l: NodeList<i32> = [10, 20, 30].into_iter().collect();
        let c = l.advance(l.begin(), 2);
        assert_eq!(l.get(c), Some(&30));
        assert_eq!(l.advance(l.begin(), 9), l.end());
        assert_eq!(l.distance(l.begin(), l.end()), 3);
    }

    #[test]
    fn append_drains_other() {
        let mut a: NodeList<i32> = [1, 2].into_iter().collect();
        let mut b: NodeList<i32> = [3, 4].into_iter().collect();
        a.append(&mut b);
        assert_eq!(collect(&a), vec![1, 2, 3, 4]);
        assert!(b.is_empty());
    }

    #[test]
    fn swap_exchanges_values_in_place() {
        let mut l: NodeList<i32> = [1, 2, 3].into_iter().collect();
        let first = l.begin();
        let last = l.prev(l.end());
        l.swap(first, last);
        assert_eq!(collect(&l), vec![3, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn foreign_cursor_panics() {
        let a: NodeList<i32> = [1].into_iter().collect();
        let b: NodeList<i32> = [2].into_iter().collect();
        let _ = a.get(b.begin());
    }
}
