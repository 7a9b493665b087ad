//! Set algebra over sorted ranges.
//!
//! Inputs must be sorted by the same order the call uses; outputs come out
//! sorted by it too. Equivalent elements tie-break toward the left (first)
//! range: `set_union` emits the left copy, and wherever both sides hold an
//! equivalent element the pass consumes one from each. All writers share the
//! destination convention of [`super::modify`]: caller-provided range,
//! panic on exhaustion, past-the-end cursor returned.

use crate::cursor::{Sequence, SequenceMut};

use super::modify::{copy, emit_into};

/// Merge two sorted ranges into one sorted destination. Stable: on ties the
/// left element is emitted first.
pub fn merge<A, B, D>(
    a: &A,
    af: A::Cursor,
    al: A::Cursor,
    b: &B,
    bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Ord + Clone,
{
    merge_by(a, af, al, b, bf, bl, dst, out, |x, y| x < y)
}

pub fn merge_by<A, B, D, F>(
    a: &A,
    mut af: A::Cursor,
    al: A::Cursor,
    b: &B,
    mut bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut less: F,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    while af != al && bf != bl {
        let x = a.get(af).expect("cursor in range");
        let y = b.get(bf).expect("cursor in range");
        if less(y, x) {
            let v = y.clone();
            emit_into(dst, &mut out, v);
            bf = b.next(bf);
        } else {
            let v = x.clone();
            emit_into(dst, &mut out, v);
            af = a.next(af);
        }
    }
    let out = copy(a, af, al, dst, out);
    copy(b, bf, bl, dst, out)
}

/// Whether sorted `[bf, bl)` is a subset of sorted `[af, al)`, counting
/// multiplicity.
pub fn includes<A, B>(
    a: &A,
    af: A::Cursor,
    al: A::Cursor,
    b: &B,
    bf: B::Cursor,
    bl: B::Cursor,
) -> bool
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Ord,
{
    includes_by(a, af, al, b, bf, bl, |x, y| x < y)
}

pub fn includes_by<A, B, F>(
    a: &A,
    mut af: A::Cursor,
    al: A::Cursor,
    b: &B,
    mut bf: B::Cursor,
    bl: B::Cursor,
    mut less: F,
) -> bool
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    while bf != bl {
        if af == al {
            return false;
        }
        let x = a.get(af).expect("cursor in range");
        let y = b.get(bf).expect("cursor in range");
        if less(y, x) {
            return false;
        }
        if !less(x, y) {
            bf = b.next(bf);
        }
        af = a.next(af);
    }
    true
}

/// Elements present in either range; equivalent elements appear once, from
/// the left range.
pub fn set_union<A, B, D>(
    a: &A,
    af: A::Cursor,
    al: A::Cursor,
    b: &B,
    bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Ord + Clone,
{
    set_union_by(a, af, al, b, bf, bl, dst, out, |x, y| x < y)
}

pub fn set_union_by<A, B, D, F>(
    a: &A,
    mut af: A::Cursor,
    al: A::Cursor,
    b: &B,
    mut bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut less: F,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    while af != al && bf != bl {
        let x = a.get(af).expect("cursor in range");
        let y = b.get(bf).expect("cursor in range");
        if less(x, y) {
            let v = x.clone();
            emit_into(dst, &mut out, v);
            af = a.next(af);
        } else if less(y, x) {
            let v = y.clone();
            emit_into(dst, &mut out, v);
            bf = b.next(bf);
        } else {
            let v = x.clone();
            emit_into(dst, &mut out, v);
            af = a.next(af);
            bf = b.next(bf);
        }
    }
    let out = copy(a, af, al, dst, out);
    copy(b, bf, bl, dst, out)
}

/// Elements present in both ranges; the emitted copy comes from the left.
pub fn set_intersection<A, B, D>(
    a: &A,
    af: A::Cursor,
    al: A::Cursor,
    b: &B,
    bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Ord + Clone,
{
    set_intersection_by(a, af, al, b, bf, bl, dst, out, |x, y| x < y)
}

pub fn set_intersection_by<A, B, D, F>(
    a: &A,
    mut af: A::Cursor,
    al: A::Cursor,
    b: &B,
    mut bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut less: F,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    while af != al && bf != bl {
        let x = a.get(af).expect("cursor in range");
        let y = b.get(bf).expect("cursor in range");
        if less(x, y) {
            af = a.next(af);
        } else if less(y, x) {
            bf = b.next(bf);
        } else {
            let v = x.clone();
            emit_into(dst, &mut out, v);
            af = a.next(af);
            bf = b.next(bf);
        }
    }
    out
}

/// Elements of the left range with no equivalent in the right.
pub fn set_difference<A, B, D>(
    a: &A,
    af: A::Cursor,
    al: A::Cursor,
    b: &B,
    bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Ord + Clone,
{
    set_difference_by(a, af, al, b, bf, bl, dst, out, |x, y| x < y)
}

pub fn set_difference_by<A, B, D, F>(
    a: &A,
    mut af: A::Cursor,
    al: A::Cursor,
    b: &B,
    mut bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut less: F,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    while af != al && bf != bl {
        let x = a.get(af).expect("cursor in range");
        let y = b.get(bf).expect("cursor in range");
        if less(x, y) {
            let v = x.clone();
            emit_into(dst, &mut out, v);
            af = a.next(af);
        } else if less(y, x) {
            bf = b.next(bf);
        } else {
            af = a.next(af);
            bf = b.next(bf);
        }
    }
    copy(a, af, al, dst, out)
}

/// Elements present in exactly one of the two ranges.
pub fn set_symmetric_difference<A, B, D>(
    a: &A,
    af: A::Cursor,
    al: A::Cursor,
    b: &B,
    bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    out: D::Cursor,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Ord + Clone,
{
    set_symmetric_difference_by(a, af, al, b, bf, bl, dst, out, |x, y| x < y)
}

pub fn set_symmetric_difference_by<A, B, D, F>(
    a: &A,
    mut af: A::Cursor,
    al: A::Cursor,
    b: &B,
    mut bf: B::Cursor,
    bl: B::Cursor,
    dst: &mut D,
    mut out: D::Cursor,
    mut less: F,
) -> D::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    D: SequenceMut<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    while af != al && bf != bl {
        let x = a.get(af).expect("cursor in range");
        let y = b.get(bf).expect("cursor in range");
        if less(x, y) {
            let v = x.clone();
            emit_into(dst, &mut out, v);
            af = a.next(af);
        } else if less(y, x) {
            let v = y.clone();
            emit_into(dst, &mut out, v);
            bf = b.next(bf);
        } else {
            af = a.next(af);
            bf = b.next(bf);
        }
    }
    let out = copy(a, af, al, dst, out);
    copy(b, bf, bl, dst, out)
}
