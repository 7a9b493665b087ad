//! Non-modifying range algorithms: search, count, comparison, min/max.
//!
//! Every function walks a half-open cursor range `[first, last)` through the
//! `Sequence` trait. Absence is signalled by returning `last`, never by an
//! error. Plain variants compare with `PartialEq`/`Ord`; `_by` variants take
//! the predicate or strict-weak-order comparator explicitly.

use crate::cursor::Sequence;

/// First cursor in `[first, last)` whose value equals `target`, else `last`.
pub fn find<S>(seq: &S, first: S::Cursor, last: S::Cursor, target: &S::Item) -> S::Cursor
where
    S: Sequence,
    S::Item: PartialEq,
{
    find_by(seq, first, last, |x| x == target)
}

/// First cursor whose value satisfies `pred`, else `last`.
pub fn find_by<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut c = first;
    while c != last {
        if pred(seq.get(c).expect("cursor in range")) {
            return c;
        }
        c = seq.next(c);
    }
    last
}

/// First cursor whose value does not satisfy `pred`, else `last`.
pub fn find_by_not<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    find_by(seq, first, last, |x| !pred(x))
}

pub fn count<S>(seq: &S, first: S::Cursor, last: S::Cursor, target: &S::Item) -> usize
where
    S: Sequence,
    S::Item: PartialEq,
{
    count_by(seq, first, last, |x| x == target)
}

pub fn count_by<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, mut pred: P) -> usize
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut c = first;
    let mut n = 0;
    while c != last {
        if pred(seq.get(c).expect("cursor in range")) {
            n += 1;
        }
        c = seq.next(c);
    }
    n
}

pub fn all_of<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, mut pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    find_by(seq, first, last, |x| !pred(x)) == last
}

pub fn any_of<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    find_by(seq, first, last, pred) != last
}

pub fn none_of<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    find_by(seq, first, last, pred) == last
}

pub fn for_each<S, F>(seq: &S, first: S::Cursor, last: S::Cursor, mut f: F)
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    let mut c = first;
    while c != last {
        f(seq.get(c).expect("cursor in range"));
        c = seq.next(c);
    }
}

/// First pair of positions where the two ranges differ. Stops at whichever
/// range ends first.
pub fn mismatch<A, B>(
    a: &A,
    mut af: A::Cursor,
    al: A::Cursor,
    b: &B,
    mut bf: B::Cursor,
    bl: B::Cursor,
) -> (A::Cursor, B::Cursor)
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq,
{
    while af != al && bf != bl {
        let x = a.get(af).expect("cursor in range");
        let y = b.get(bf).expect("cursor in range");
        if x != y {
            break;
        }
        af = a.next(af);
        bf = b.next(bf);
    }
    (af, bf)
}

/// Whether the two ranges have equal length and equal elements.
pub fn equal<A, B>(
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
    A::Item: PartialEq,
{
    let (ma, mb) = mismatch(a, af, al, b, bf, bl);
    ma == al && mb == bl
}

/// First cursor where an element equals its successor, else `last`.
pub fn adjacent_find<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: Sequence,
    S::Item: PartialEq,
{
    adjacent_find_by(seq, first, last, |a, b| a == b)
}

pub fn adjacent_find_by<S, P>(seq: &S, first: S::Cursor, last: S::Cursor, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut c = first;
    let mut n = seq.next(first);
    while n != last {
        if pred(
            seq.get(c).expect("cursor in range"),
            seq.get(n).expect("cursor in range"),
        ) {
            return c;
        }
        c = n;
        n = seq.next(n);
    }
    last
}

/// First occurrence of `[nf, nl)` inside `[hf, hl)`; `hl` when absent, `hf`
/// for an empty needle.
pub fn search<A, B>(
    hay: &A,
    hf: A::Cursor,
    hl: A::Cursor,
    needle: &B,
    nf: B::Cursor,
    nl: B::Cursor,
) -> A::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq,
{
    if nf == nl {
        return hf;
    }
    let mut start = hf;
    while start != hl {
        let mut h = start;
        let mut n = nf;
        loop {
            if n == nl {
                return start;
            }
            if h == hl {
                return hl;
            }
            let x = hay.get(h).expect("cursor in range");
            let y = needle.get(n).expect("cursor in range");
            if x != y {
                break;
            }
            h = hay.next(h);
            n = needle.next(n);
        }
        start = hay.next(start);
    }
    hl
}

/// Last occurrence of `[nf, nl)` inside `[hf, hl)`; `hl` when absent.
pub fn find_end<A, B>(
    hay: &A,
    hf: A::Cursor,
    hl: A::Cursor,
    needle: &B,
    nf: B::Cursor,
    nl: B::Cursor,
) -> A::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq,
{
    if nf == nl {
        return hl;
    }
    let mut best = hl;
    let mut from = hf;
    loop {
        let found = search(hay, from, hl, needle, nf, nl);
        if found == hl {
            return best;
        }
        best = found;
        from = hay.next(found);
    }
}

/// First element of `[hf, hl)` equal to any element of `[nf, nl)`.
pub fn find_first_of<A, B>(
    hay: &A,
    hf: A::Cursor,
    hl: A::Cursor,
    needle: &B,
    nf: B::Cursor,
    nl: B::Cursor,
) -> A::Cursor
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq,
{
    find_by(hay, hf, hl, |x| {
        any_of(needle, nf, nl, |y| y == x)
    })
}

/// Start of the first run of `count` consecutive elements equal to
/// `target`; `last` when absent, `first` for `count == 0`.
pub fn search_n<S>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    count: usize,
    target: &S::Item,
) -> S::Cursor
where
    S: Sequence,
    S::Item: PartialEq,
{
    if count == 0 {
        return first;
    }
    let mut start = first;
    while start != last {
        if seq.get(start).expect("cursor in range") == target {
            let mut c = seq.next(start);
            let mut run = 1;
            while run < count && c != last && seq.get(c).expect("cursor in range") == target {
                run += 1;
                c = seq.next(c);
            }
            if run == count {
                return start;
            }
            start = c;
        } else {
            start = seq.next(start);
        }
    }
    last
}

/// First of the smallest elements; `last` for an empty range.
pub fn min_element<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: Sequence,
    S::Item: Ord,
{
    min_element_by(seq, first, last, |a, b| a < b)
}

pub fn min_element_by<S, F>(seq: &S, first: S::Cursor, last: S::Cursor, mut less: F) -> S::Cursor
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut best = first;
    let mut c = seq.next(first);
    while c != last {
        if less(
            seq.get(c).expect("cursor in range"),
            seq.get(best).expect("cursor in range"),
        ) {
            best = c;
        }
        c = seq.next(c);
    }
    best
}

/// First of the largest elements; `last` for an empty range.
pub fn max_element<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: Sequence,
    S::Item: Ord,
{
    max_element_by(seq, first, last, |a, b| a < b)
}

pub fn max_element_by<S, F>(seq: &S, first: S::Cursor, last: S::Cursor, mut less: F) -> S::Cursor
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut best = first;
    let mut c = seq.next(first);
    while c != last {
        if less(
            seq.get(best).expect("cursor in range"),
            seq.get(c).expect("cursor in range"),
        ) {
            best = c;
        }
        c = seq.next(c);
    }
    best
}

/// `(first minimum, last maximum)`; both `last` for an empty range.
pub fn minmax_element<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> (S::Cursor, S::Cursor)
where
    S: Sequence,
    S::Item: Ord,
{
    minmax_element_by(seq, first, last, |a, b| a < b)
}

pub fn minmax_element_by<S, F>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    mut less: F,
) -> (S::Cursor, S::Cursor)
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return (last, last);
    }
    let mut min = first;
    let mut max = first;
    let mut c = seq.next(first);
    while c != last {
        let x = seq.get(c).expect("cursor in range");
        if less(x, seq.get(min).expect("cursor in range")) {
            min = c;
        }
        if !less(x, seq.get(max).expect("cursor in range")) {
            max = c;
        }
        c = seq.next(c);
    }
    (min, max)
}
