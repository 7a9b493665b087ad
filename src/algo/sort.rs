//! Sorting, sortedness probes, and the heap operation family.
//!
//! `sort` needs `RandomAccess` for index arithmetic; `partial_sort` and the
//! push/pop heap operations get by on bidirectional cursors alone.
//!
//! The heap family maintains its range as a descending sorted run rather
//! than a binary-tree layout. The observable contract is unchanged: the
//! largest element sits at `first`, `pop_heap` moves it to `prev(last)`, and
//! `sort_heap` leaves the range ascending. Layout-dependent tree shapes are
//! deliberately not promised.

use crate::cursor::{RandomAccess, Sequence, SequenceMut};

use super::modify::rotate;

/// Sort `[first, last)` ascending. Unstable.
pub fn sort<S>(seq: &mut S, first: S::Cursor, last: S::Cursor)
where
    S: RandomAccess + SequenceMut,
    S::Item: Ord + Clone,
{
    sort_by(seq, first, last, |a, b| a < b);
}

/// Sort `[first, last)` by a strict-weak-order `less`. Unstable.
pub fn sort_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut less: F)
where
    S: RandomAccess + SequenceMut,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let lo = seq.position(first);
    let hi = seq.position(last);
    quicksort(seq, lo, hi, &mut less);
}

fn quicksort<S, F>(seq: &mut S, lo: usize, hi: usize, less: &mut F)
where
    S: RandomAccess + SequenceMut,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if hi <= lo + 1 {
        return;
    }
    let split = hoare_partition(seq, lo, hi, less);
    quicksort(seq, lo, split + 1, less);
    quicksort(seq, split + 1, hi, less);
}

/// Hoare partition around the value at `lo`. Returns `j` such that
/// `[lo, j]` holds elements `<=` pivot and `(j, hi)` elements `>=` pivot,
/// with `lo <= j < hi - 1`, so both recursive halves shrink.
fn hoare_partition<S, F>(seq: &mut S, lo: usize, hi: usize, less: &mut F) -> usize
where
    S: RandomAccess + SequenceMut,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let pivot = seq
        .get(seq.at_offset(lo))
        .expect("cursor in range")
        .clone();
    let mut i = lo;
    let mut j = hi - 1;
    loop {
        while less(seq.get(seq.at_offset(i)).expect("cursor in range"), &pivot) {
            i += 1;
        }
        while less(&pivot, seq.get(seq.at_offset(j)).expect("cursor in range")) {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        let a = seq.at_offset(i);
        let b = seq.at_offset(j);
        seq.swap(a, b);
        i += 1;
        j -= 1;
    }
}

/// Place the smallest `distance(first, middle)` elements, sorted, into
/// `[first, middle)`; the tail order is unspecified.
pub fn partial_sort<S>(seq: &mut S, first: S::Cursor, middle: S::Cursor, last: S::Cursor)
where
    S: SequenceMut,
    S::Item: Ord,
{
    partial_sort_by(seq, first, middle, last, |a, b| a < b);
}

/// Selection over cursors: quadratic, but free of random-access demands.
pub fn partial_sort_by<S, F>(
    seq: &mut S,
    first: S::Cursor,
    middle: S::Cursor,
    last: S::Cursor,
    mut less: F,
) where
    S: SequenceMut,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut fill = first;
    while fill != middle {
        let mut best = fill;
        let mut c = seq.next(fill);
        while c != last {
            if less(
                seq.get(c).expect("cursor in range"),
                seq.get(best).expect("cursor in range"),
            ) {
                best = c;
            }
            c = seq.next(c);
        }
        if best != fill {
            seq.swap(fill, best);
        }
        fill = seq.next(fill);
    }
}

pub fn is_sorted<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> bool
where
    S: Sequence,
    S::Item: Ord,
{
    is_sorted_by(seq, first, last, |a, b| a < b)
}

pub fn is_sorted_by<S, F>(seq: &S, first: S::Cursor, last: S::Cursor, less: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    is_sorted_until_by(seq, first, last, less) == last
}

/// Cursor to the first element breaking ascending order, else `last`.
pub fn is_sorted_until<S>(seq: &S, first: S::Cursor, last: S::Cursor) -> S::Cursor
where
    S: Sequence,
    S::Item: Ord,
{
    is_sorted_until_by(seq, first, last, |a, b| a < b)
}

pub fn is_sorted_until_by<S, F>(
    seq: &S,
    first: S::Cursor,
    last: S::Cursor,
    mut less: F,
) -> S::Cursor
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut prev = first;
    let mut c = seq.next(first);
    while c != last {
        if less(
            seq.get(c).expect("cursor in range"),
            seq.get(prev).expect("cursor in range"),
        ) {
            return c;
        }
        prev = c;
        c = seq.next(c);
    }
    last
}

pub fn make_heap<S>(seq: &mut S, first: S::Cursor, last: S::Cursor)
where
    S: RandomAccess + SequenceMut,
    S::Item: Ord + Clone,
{
    make_heap_by(seq, first, last, |a, b| a < b);
}

pub fn make_heap_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut less: F)
where
    S: RandomAccess + SequenceMut,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    sort_by(seq, first, last, |a, b| less(b, a));
}

/// Absorb the element at `prev(last)` into the heap `[first, prev(last))`.
pub fn push_heap<S>(seq: &mut S, first: S::Cursor, last: S::Cursor)
where
    S: SequenceMut,
    S::Item: Ord + Clone,
{
    push_heap_by(seq, first, last, |a, b| a < b);
}

pub fn push_heap_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, mut less: F)
where
    S: SequenceMut,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return;
    }
    let item = seq.prev(last);
    if item == first {
        return;
    }
    let v = seq.get(item).expect("cursor in range").clone();
    // Find the first kept element that belongs after the new one, then
    // rotate the new element into that slot.
    let mut c = first;
    while c != item && !less(seq.get(c).expect("cursor in range"), &v) {
        c = seq.next(c);
    }
    if c != item {
        rotate(seq, c, item, last);
    }
}

/// Move the heap maximum to `prev(last)`; `[first, prev(last))` stays a heap.
pub fn pop_heap<S>(seq: &mut S, first: S::Cursor, last: S::Cursor)
where
    S: SequenceMut,
    S::Item: Ord + Clone,
{
    pop_heap_by(seq, first, last, |a, b| a < b);
}

/// The comparator is part of the family's signature but goes unused here:
/// the heap keeps its maximum at `first`, so popping is a pure rotation.
pub fn pop_heap_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, _less: F)
where
    S: SequenceMut,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return;
    }
    let second = seq.next(first);
    if second == last {
        return;
    }
    rotate(seq, first, second, last);
}

/// Turn a heap into an ascending sorted range.
pub fn sort_heap<S>(seq: &mut S, first: S::Cursor, last: S::Cursor)
where
    S: RandomAccess + SequenceMut,
    S::Item: Ord + Clone,
{
    sort_heap_by(seq, first, last, |a, b| a < b);
}

pub fn sort_heap_by<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, less: F)
where
    S: RandomAccess + SequenceMut,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    sort_by(seq, first, last, less);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_list::NodeList;
    use crate::vec_seq::VecSeq;

    #[test]
    fn sort_random_order() {
        let mut v = VecSeq::from_vec(vec![5, 1, 4, 2, 3]);
        let (b, e) = (v.begin(), v.end());
        sort(&mut v, b, e);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_adversarial_inputs() {
        // First-element pivot worst cases: sorted, reversed, all-equal.
        for input in [
            (1..=32).collect::<Vec<i32>>(),
            (1..=32).rev().collect(),
            vec![7; 16],
            vec![2, 1],
            vec![1],
            vec![],
        ] {
            let mut expect = input.clone();
            expect.sort();
            let mut v = VecSeq::from_vec(input);
            let (b, e) = (v.begin(), v.end());
            sort(&mut v, b, e);
            assert_eq!(v.as_slice(), expect.as_slice());
        }
    }

    #[test]
    fn sort_by_descending() {
        let mut v = VecSeq::from_vec(vec![3, 1, 2]);
        let (b, e) = (v.begin(), v.end());
        sort_by(&mut v, b, e, |a, b| a > b);
        assert_eq!(v.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn sort_subrange_only() {
        let mut v = VecSeq::from_vec(vec![9, 3, 1, 2, 0]);
        let first = v.advance(v.begin(), 1);
        let last = v.advance(v.begin(), 4);
        sort(&mut v, first, last);
        assert_eq!(v.as_slice(), &[9, 1, 2, 3, 0]);
    }

    #[test]
    fn partial_sort_prefix_on_list() {
        let mut l: NodeList<i32> = [5, 3, 4, 1, 2].into_iter().collect();
        let (b, e) = (l.begin(), l.end());
        let middle = l.advance(b, 2);
        partial_sort(&mut l, b, middle, e);
        let out: Vec<i32> = l.iter().copied().collect();
        assert_eq!(&out[..2], &[1, 2]);
        let mut tail = out[2..].to_vec();
        tail.sort();
        assert_eq!(tail, vec![3, 4, 5]);
    }

    #[test]
    fn sortedness_probes() {
        let v = VecSeq::from_vec(vec![1, 2, 2, 3]);
        assert!(is_sorted(&v, v.begin(), v.end()));

        let w = VecSeq::from_vec(vec![1, 3, 2, 4]);
        assert!(!is_sorted(&w, w.begin(), w.end()));
        let c = is_sorted_until(&w, w.begin(), w.end());
        assert_eq!(w.distance(w.begin(), c), 2);

        let empty: VecSeq<i32> = VecSeq::new();
        assert!(is_sorted(&empty, empty.begin(), empty.end()));
    }

    #[test]
    fn heap_lifecycle() {
        let mut v = VecSeq::from_vec(vec![3, 1, 4, 1, 5]);
        let (b, e) = (v.begin(), v.end());
        make_heap(&mut v, b, e);
        assert_eq!(v.get(v.begin()), Some(&5));

        // Append then absorb.
        v.push(9);
        let (b, e) = (v.begin(), v.end());
        push_heap(&mut v, b, e);
        assert_eq!(v.get(v.begin()), Some(&9));

        // Maximum retires to the back.
        let (b, e) = (v.begin(), v.end());
        pop_heap(&mut v, b, e);
        assert_eq!(v.pop(), Some(9));
        assert_eq!(v.get(v.begin()), Some(&5));

        let (b, e) = (v.begin(), v.end());
        sort_heap(&mut v, b, e);
        assert_eq!(v.as_slice(), &[1, 1, 3, 4, 5]);
    }

    #[test]
    fn heap_by_inverted_order() {
        let mut v = VecSeq::from_vec(vec![3, 1, 2]);
        let (b, e) = (v.begin(), v.end());
        // Min-heap via reversed comparator.
        make_heap_by(&mut v, b, e, |a, b| a > b);
        assert_eq!(v.get(v.begin()), Some(&1));
    }
}
