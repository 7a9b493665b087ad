//! Mutating and copying range algorithms.
//!
//! Copying variants write through `SequenceMut::set` into a caller-provided
//! destination range starting at `out`; the destination must already hold
//! enough elements, and exhausting it panics. In-place removal algorithms
//! follow the shift-down convention: survivors are compacted to the front of
//! the range and the returned cursor is the new logical end, with the tail
//! left unspecified for the caller to erase.

use crate::cursor::{RandomAccess, Sequence, SequenceMut};
use rand::Rng;

use super::search::find_by;

/// Write `v` at `*out` and step the output cursor forward.
pub(super) fn emit_into<D>(dst: &mut D, out: &mut D::Cursor, v: D::Item)
where
    D: SequenceMut,
{
    assert!(*out != dst.end(), "destination range exhausted");
    dst.set(*out, v);
    *out = dst.next(*out);
}

/// Copy `[first, last)` into the destination starting at `out`; returns the
/// cursor past the last element written.
pub fn copy<A, D>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
{
    let mut c = first;
    while c != last {
        let v = src.get(c).expect("cursor in range").clone();
        emit_into(dst, &mut out, v);
        c = src.next(c);
    }
    out
}

pub fn copy_if<A, D, P>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut pred: P,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    P: FnMut(&A::Item) -> bool,
{
    let mut c = first;
    while c != last {
        let x = src.get(c).expect("cursor in range");
        if pred(x) {
            let v = x.clone();
            emit_into(dst, &mut out, v);
        }
        c = src.next(c);
    }
    out
}

/// Copy the first `n` elements starting at `first`; the source must hold at
/// least `n` elements past `first`.
pub fn copy_n<A, D>(
    src: &A,
    first: A::Cursor,
    n: usize,
    dst: &mut D,
    mut out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
{
    let mut c = first;
    for _ in 0..n {
        let v = src.get(c).expect("source range exhausted").clone();
        emit_into(dst, &mut out, v);
        c = src.next(c);
    }
    out
}

pub fn fill<S>(seq: &mut S, first: S::Cursor, last: S::Cursor, value: &S::Item)
where
    S: SequenceMut,
    S::Item: Clone,
{
    let mut c = first;
    while c != last {
        seq.set(c, value.clone());
        c = seq.next(c);
    }
}

/// Overwrite `n` elements starting at `first`; returns the cursor past the
/// last one written.
pub fn fill_n<S>(seq: &mut S, first: S::Cursor, n: usize, value: &S::Item) -> S::Cursor
where
    S: SequenceMut,
    S::Item: Clone,
{
    let mut c = first;
    for _ in 0..n {
        assert!(c != seq.end(), "destination range exhausted");
        seq.set(c, value.clone());
        c = seq.next(c);
    }
    c
}

/// Map `[first, last)` through `f` into the destination starting at `out`.
pub fn transform<A, D, F>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut f: F,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut,
    F: FnMut(&A::Item) -> D::Item,
{
    let mut c = first;
    while c != last {
        let v = f(src.get(c).expect("cursor in range"));
        emit_into(dst, &mut out, v);
        c = src.next(c);
    }
    out
}

/// Overwrite `[first, last)` with successive results of `f`.
pub fn generate<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut f: F)
where
    S: SequenceMut,
    F: FnMut() -> S::Item,
{
    let mut c = first;
    while c != last {
        seq.set(c, f());
        c = seq.next(c);
    }
}

/// Exchange `[af, al)` with the equally long range starting at `bf` in a
/// second container; returns the cursor past the last element touched in `b`.
pub fn swap_ranges<A, B>(
    a: &mut A,
    af: A::Cursor,
    al: A::Cursor,
    b: &mut B,
    mut bf: B::Cursor,
) -> B::Cursor
where
    A: SequenceMut,
    B: SequenceMut<Item = A::Item>,
    A::Item: Clone,
{
    let mut c = af;
    while c != al {
        let av = a.get(c).expect("cursor in range").clone();
        let bv = b.set(bf, av).expect("destination range exhausted");
        a.set(c, bv);
        c = a.next(c);
        bf = b.next(bf);
    }
    bf
}

/// Reverse `[first, last)` in place by swapping from both ends.
pub fn reverse<S>(seq: &mut S, first: S::Cursor, last: S::Cursor)
where
    S: SequenceMut,
{
    if first == last {
        return;
    }
    let mut i = first;
    let mut j = seq.prev(last);
    while i != j {
        seq.swap(i, j);
        i = seq.next(i);
        if i == j {
            break;
        }
        j = seq.prev(j);
    }
}

pub fn reverse_copy<A, D>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
{
    let mut c = last;
    while c != first {
        c = src.prev(c);
        let v = src.get(c).expect("cursor in range").clone();
        emit_into(dst, &mut out, v);
    }
    out
}

/// Rotate `[first, last)` left so that `middle` becomes the first element;
/// returns the new position of the old first element.
pub fn rotate<S>(seq: &mut S, first: S::Cursor, middle: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: SequenceMut,
{
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }
    // Three-reversal rotation; needs no scratch space.
    reverse(seq, first, middle);
    reverse(seq, middle, last);
    reverse(seq, first, last);
    let shift = seq.distance(middle, last);
    seq.advance(first, shift)
}

pub fn rotate_copy<A, D>(
    src: &A,
    first: A::Cursor,
    middle: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
{
    let out = copy(src, middle, last, dst, out);
    copy(src, first, middle, dst, out)
}

/// Fisher-Yates shuffle of `[first, last)` driven by `rng`.
pub fn shuffle<S, R>(seq: &mut S, first: S::Cursor, last: S::Cursor, rng: &mut R)
where
    S: RandomAccess + SequenceMut,
    R: Rng + ?Sized,
{
    let lo = seq.position(first);
    let hi = seq.position(last);
    let n = hi - lo;
    if n < 2 {
        return;
    }
    let mut i = n - 1;
    while i > 0 {
        let j = rng.gen_range(0..=i);
        if j != i {
            let a = seq.at_offset(lo + i);
            let b = seq.at_offset(lo + j);
            seq.swap(a, b);
        }
        i -= 1;
    }
}

/// Shift elements not equal to `target` to the front; returns the new
/// logical end. The tail past it is unspecified.
pub fn remove<S>(seq: &mut S, first: S::Cursor, last: S::Cursor, target: &S::Item) -> S::Cursor
where
    S: SequenceMut,
    S::Item: PartialEq + Clone,
{
    remove_by(seq, first, last, |x| x == target)
}

pub fn remove_by<S, P>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut pred: P) -> S::Cursor
where
    S: SequenceMut,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut out = find_by(seq, first, last, &mut pred);
    if out == last {
        return last;
    }
    let mut read = seq.next(out);
    while read != last {
        let x = seq.get(read).expect("cursor in range");
        if !pred(x) {
            let v = x.clone();
            seq.set(out, v);
            out = seq.next(out);
        }
        read = seq.next(read);
    }
    out
}

pub fn remove_copy<A, D>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    out: D::Cursor,
    target: &A::Item,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: PartialEq + Clone,
{
    copy_if(src, first, last, dst, out, |x| x != target)
}

pub fn remove_copy_by<A, D, P>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    out: D::Cursor,
    mut pred: P,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    P: FnMut(&A::Item) -> bool,
{
    copy_if(src, first, last, dst, out, |x| !pred(x))
}

/// Collapse runs of adjacent equal elements to their first occurrence;
/// returns the new logical end.
pub fn unique<S>(seq: &mut S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: SequenceMut,
    S::Item: PartialEq + Clone,
{
    unique_by(seq, first, last, |a, b| a == b)
}

pub fn unique_by<S, P>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut same: P) -> S::Cursor
where
    S: SequenceMut,
    S::Item: Clone,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut out = first;
    let mut read = seq.next(first);
    while read != last {
        let dup = same(
            seq.get(out).expect("cursor in range"),
            seq.get(read).expect("cursor in range"),
        );
        if !dup {
            out = seq.next(out);
            if out != read {
                let v = seq.get(read).expect("cursor in range").clone();
                seq.set(out, v);
            }
        }
        read = seq.next(read);
    }
    seq.next(out)
}

pub fn unique_copy<A, D>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: PartialEq + Clone,
{
    unique_copy_by(src, first, last, dst, out, |a, b| a == b)
}

pub fn unique_copy_by<A, D, P>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut same: P,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    P: FnMut(&A::Item, &A::Item) -> bool,
{
    if first == last {
        return out;
    }
    let mut kept = first;
    let v = src.get(kept).expect("cursor in range").clone();
    emit_into(dst, &mut out, v);
    let mut c = src.next(first);
    while c != last {
        let dup = same(
            src.get(kept).expect("cursor in range"),
            src.get(c).expect("cursor in range"),
        );
        if !dup {
            kept = c;
            let v = src.get(c).expect("cursor in range").clone();
            emit_into(dst, &mut out, v);
        }
        c = src.next(c);
    }
    out
}

pub fn replace<S>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    old: &S::Item,
    new: &S::Item,
) where
    S: SequenceMut,
    S::Item: PartialEq + Clone,
{
    replace_by(seq, first, last, |x| x == old, new);
}

pub fn replace_by<S, P>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    mut pred: P,
    new: &S::Item,
) where
    S: SequenceMut,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut c = first;
    while c != last {
        if pred(seq.get(c).expect("cursor in range")) {
            seq.set(c, new.clone());
        }
        c = seq.next(c);
    }
}

pub fn replace_copy<A, D>(
    src: &A,
    first: A::Cursor,
    last: A::Cursor,
    dst: &mut D,
    out: D::Cursor,
    old: &A::Item,
    new: &A::Item,
) -> D::Cursor
where
    A: Sequence,
    D: SequenceMut<Item = A::Item>,
    A::Item: PartialEq + Clone,
{
    transform(src, first, last, dst, out, |x| {
        if x == old {
            new.clone()
        } else {
            x.clone()
        }
    })
}
