//! Lexicographic permutation stepping.
//!
//! `next_permutation` rewrites `[first, last)` into the next permutation in
//! lexicographic order and returns `true`; from the final (descending)
//! permutation it wraps to the first (ascending) and returns `false`.
//! `prev_permutation` walks the same cycle backwards. Ranges shorter than
//! two elements have a single permutation: no rewrite, `false`.

use crate::cursor::{RandomAccess, Sequence, SequenceMut};

pub fn next_permutation<S>(seq: &mut S, first: S::Cursor, last: S::Cursor) -> bool
where
    S: RandomAccess + SequenceMut,
    S::Item: Ord,
{
    next_permutation_by(seq, first, last, |a, b| a < b)
}

pub fn next_permutation_by<S, F>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    mut less: F,
) -> bool
where
    S: RandomAccess + SequenceMut,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    step_permutation(seq, first, last, &mut less)
}

pub fn prev_permutation<S>(seq: &mut S, first: S::Cursor, last: S::Cursor) -> bool
where
    S: RandomAccess + SequenceMut,
    S::Item: Ord,
{
    prev_permutation_by(seq, first, last, |a, b| a < b)
}

pub fn prev_permutation_by<S, F>(
    seq: &mut S,
    first: S::Cursor,
    last: S::Cursor,
    mut less: F,
) -> bool
where
    S: RandomAccess + SequenceMut,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    step_permutation(seq, first, last, &mut |a: &S::Item, b: &S::Item| less(b, a))
}

/// Classic pivot/successor/reverse-suffix step, on offsets.
fn step_permutation<S, F>(seq: &mut S, first: S::Cursor, last: S::Cursor, less: &mut F) -> bool
where
    S: RandomAccess + SequenceMut,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let lo = seq.position(first);
    let hi = seq.position(last);
    let n = hi - lo;
    if n < 2 {
        return false;
    }

    // Rightmost i with a[i] < a[i + 1].
    let mut i = n - 1;
    loop {
        let succ = i;
        i -= 1;
        let ascending = {
            let x = seq.get(seq.at_offset(lo + i)).expect("cursor in range");
            let y = seq.get(seq.at_offset(lo + succ)).expect("cursor in range");
            less(x, y)
        };
        if ascending {
            // Rightmost j past i with a[i] < a[j]; the suffix is descending
            // so the scan always terminates at succ or later.
            let mut j = n - 1;
            loop {
                let greater = {
                    let x = seq.get(seq.at_offset(lo + i)).expect("cursor in range");
                    let y = seq.get(seq.at_offset(lo + j)).expect("cursor in range");
                    less(x, y)
                };
                if greater {
                    break;
                }
                j -= 1;
            }
            let a = seq.at_offset(lo + i);
            let b = seq.at_offset(lo + j);
            seq.swap(a, b);
            reverse_offsets(seq, lo + succ, hi);
            return true;
        }
        if i == 0 {
            // Fully descending: wrap around to the ascending permutation.
            reverse_offsets(seq, lo, hi);
            return false;
        }
    }
}

fn reverse_offsets<S>(seq: &mut S, mut lo: usize, mut hi: usize)
where
    S: RandomAccess + SequenceMut,
{
    while lo + 1 < hi {
        hi -= 1;
        let a = seq.at_offset(lo);
        let b = seq.at_offset(hi);
        seq.swap(a, b);
        lo += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec_seq::VecSeq;

    #[test]
    fn steps_in_lexicographic_order() {
        let mut v = VecSeq::from_vec(vec![1, 2, 3]);
        let expected = [
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ];
        for want in &expected {
            let (b, e) = (v.begin(), v.end());
            assert!(next_permutation(&mut v, b, e));
            assert_eq!(v.as_slice(), want.as_slice());
        }
        // Final permutation wraps to the first and reports false.
        let (b, e) = (v.begin(), v.end());
        assert!(!next_permutation(&mut v, b, e));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn enumerates_all_factorial_orderings() {
        let mut v = VecSeq::from_vec(vec![1, 2, 3, 4]);
        let mut seen = vec![v.as_slice().to_vec()];
        loop {
            let (b, e) = (v.begin(), v.end());
            if !next_permutation(&mut v, b, e) {
                break;
            }
            seen.push(v.as_slice().to_vec());
        }
        assert_eq!(seen.len(), 24);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn prev_undoes_next() {
        let mut v = VecSeq::from_vec(vec![2, 3, 1]);
        let snapshot = v.as_slice().to_vec();
        let (b, e) = (v.begin(), v.end());
        assert!(next_permutation(&mut v, b, e));
        let (b, e) = (v.begin(), v.end());
        assert!(prev_permutation(&mut v, b, e));
        assert_eq!(v.as_slice(), snapshot.as_slice());
    }

    #[test]
    fn prev_wraps_from_ascending() {
        let mut v = VecSeq::from_vec(vec![1, 2, 3]);
        let (b, e) = (v.begin(), v.end());
        assert!(!prev_permutation(&mut v, b, e));
        assert_eq!(v.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn duplicates_collapse_orderings() {
        let mut v = VecSeq::from_vec(vec![1, 1, 2]);
        let mut count = 1;
        loop {
            let (b, e) = (v.begin(), v.end());
            if !next_permutation(&mut v, b, e) {
                break;
            }
            count += 1;
        }
        // 3!/2! distinct arrangements.
        assert_eq!(count, 3);
    }

    #[test]
    fn short_ranges_are_fixed_points() {
        let mut v = VecSeq::from_vec(vec![7]);
        let (b, e) = (v.begin(), v.end());
        assert!(!next_permutation(&mut v, b, e));
        let mut empty: VecSeq<i32> = VecSeq::new();
        let (b, e) = (empty.begin(), empty.end());
        assert!(!prev_permutation(&mut empty, b, e));
    }

    #[test]
    fn by_variant_with_custom_order() {
        // Reverse comparator: next steps backwards through the cycle.
        let mut v = VecSeq::from_vec(vec![2, 1, 3]);
        let (b, e) = (v.begin(), v.end());
        assert!(next_permutation_by(&mut v, b, e, |a, b| a > b));
        assert_eq!(v.as_slice(), &[1, 3, 2]);
    }
}
