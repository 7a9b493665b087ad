//! Binary search over sorted ranges, plus the partition family.
//!
//! The search functions work on any `Sequence` through `advance` and
//! `distance`, halving a step count rather than subtracting indices. On a
//! random-access sequence each probe is O(1); on a bidirectional one the
//! walk costs O(n) per level, which still beats a linear scan on comparison
//! count.

use crate::cursor::{Sequence, SequenceMut};

use super::modify::emit_into;
use super::search::find_by_not;

/// First position in sorted `[first, last)` whose element is not less than
/// `target`.
pub fn lower_bound<S>(seq: &S, first: S::Cursor, last: S::Cursor, target: &S::Item) -> S::Cursor
where
    S: Sequence,
    S::Item: Ord,
{
    lower_bound_by(seq, first, last, target, |a, b| a < b)
}

pub fn lower_bound_by<S, F>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    target: &S::Item,
    mut less: F,
) -> S::Cursor
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut base = first;
    let mut len = seq.distance(first, last);
    while len > 0 {
        let half = len / 2;
        let mid = seq.advance(base, half);
        if less(seq.get(mid).expect("cursor in range"), target) {
            base = seq.next(mid);
            len -= half + 1;
        } else {
            len = half;
        }
    }
    base
}

/// First position in sorted `[first, last)` whose element is greater than
/// `target`.
pub fn upper_bound<S>(seq: &S, first: S::Cursor, last: S::Cursor, target: &S::Item) -> S::Cursor
where
    S: Sequence,
    S::Item: Ord,
{
    upper_bound_by(seq, first, last, target, |a, b| a < b)
}

pub fn upper_bound_by<S, F>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    target: &S::Item,
    mut less: F,
) -> S::Cursor
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut base = first;
    let mut len = seq.distance(first, last);
    while len > 0 {
        let half = len / 2;
        let mid = seq.advance(base, half);
        if less(target, seq.get(mid).expect("cursor in range")) {
            len = half;
        } else {
            base = seq.next(mid);
            len -= half + 1;
        }
    }
    base
}

/// `(lower_bound, upper_bound)` of `target` in one call.
pub fn equal_range<S>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    target: &S::Item,
) -> (S::Cursor, S::Cursor)
where
    S: Sequence,
    S::Item: Ord,
{
    equal_range_by(seq, first, last, target, |a, b| a < b)
}

pub fn equal_range_by<S, F>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    target: &S::Item,
    mut less: F,
) -> (S::Cursor, S::Cursor)
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let lo = lower_bound_by(seq, first, last, target, &mut less);
    let hi = upper_bound_by(seq, lo, last, target, &mut less);
    (lo, hi)
}

/// Whether sorted `[first, last)` contains an element equivalent to
/// `target`.
pub fn binary_search<S>(seq: &S, first: S::Cursor, last: S::Cursor, target: &S::Item) -> bool
where
    S: Sequence,
    S::Item: Ord,
{
    binary_search_by(seq, first, last, target, |a, b| a < b)
}

pub fn binary_search_by<S, F>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    target: &S::Item,
    mut less: F,
) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let c = lower_bound_by(seq, first, last, target, &mut less);
    c != last && !less(target, seq.get(c).expect("cursor in range"))
}

/// First position of the false suffix in a range partitioned by `pred`
/// (all satisfying elements first).
pub fn partition_point<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut base = first;
    let mut len = seq.distance(first, last);
    while len > 0 {
        let half = len / 2;
        let mid = seq.advance(base, half);
        if pred(seq.get(mid).expect("cursor in range")) {
            base = seq.next(mid);
            len -= half + 1;
        } else {
            len = half;
        }
    }
    base
}

/// Reorder `[first, last)` so elements satisfying `pred` precede those that
/// do not; returns the first cursor of the second group. Relative order
/// within groups is not preserved.
pub fn partition<S, P>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut pred: P) -> S::Cursor
where
    S: SequenceMut,
    P: FnMut(&S::Item) -> bool,
{
    let mut split = find_by_not(seq, first, last, &mut pred);
    if split == last {
        return last;
    }
    let mut c = seq.next(split);
    while c != last {
        if pred(seq.get(c).expect("cursor in range")) {
            seq.swap(split, c);
            split = seq.next(split);
        }
        c = seq.next(c);
    }
    split
}

/// Same contract as [`partition`]. The swap-based pass does not keep
/// relative order, so callers needing stability must carry a key that
/// encodes it.
pub fn stable_partition<S, P>(seq: &mut S, first: S::Cursor, last: S::Cursor, pred: P) -> S::Cursor
where
    S: SequenceMut,
    P: FnMut(&S::Item) -> bool,
{
    partition(seq, first, last, pred)
}

pub fn is_partitioned<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, mut pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let split = find_by_not(seq, first, last, &mut pred);
    let mut c = split;
    while c != last {
        if pred(seq.get(c).expect("cursor in range")) {
            return false;
        }
        c = seq.next(c);
    }
    true
}

/// Route each element to one of two destinations by `pred`; returns the two
/// past-the-end output cursors.
pub fn partition_copy<A, T, U, P>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst_true: &mut T,
    mut out_true: T::Cursor,
    dst_false: &mut U,
    mut out_false: U::Cursor,
    mut pred: P,
) -> (T::Cursor, U::Cursor)
where
    A: Sequence,
    T: SequenceMut<Item = A::Item>,
    U: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    P: FnMut(&A::Item) -> bool,
{
    let mut c = first;
    while c != last {
        let x = src.get(c).expect("cursor in range");
        let v = x.clone();
        if pred(x) {
            emit_into(dst_true, &mut out_true, v);
        } else {
            emit_into(dst_false, &mut out_false, v);
        }
        c = src.next(c);
    }
    (out_true, out_false)
}
