// End-to-end algorithm scenarios through the public API: one algorithm
// body serving multiple storage kinds, and the idioms callers chain
// together (remove-erase, sort-then-search, heap lifecycle).

use cursor_collections::algo;
use cursor_collections::{DequeSeq, NodeList, Sequence, UniqueMap, VecSeq};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sorted_lookup_table() {
    let v = VecSeq::from_vec(vec![1, 3, 5, 7, 9]);
    assert!(algo::binary_search(&v, v.begin(), v.end(), &5));
    assert!(!algo::binary_search(&v, v.begin(), v.end(), &4));
    let c = algo::lower_bound(&v, v.begin(), v.end(), &4);
    assert_eq!(v.get(c), Some(&5));
}

#[test]
fn sort_then_dedup_then_search() {
    let mut v = VecSeq::from_vec(vec![5, 3, 5, 1, 3, 9, 1]);
    let (b, e) = (v.begin(), v.end());
    algo::sort(&mut v, b, e);
    assert!(algo::is_sorted(&v, v.begin(), v.end()));

    // Remove-erase idiom: compact, then truncate at the logical end.
    let (b, e) = (v.begin(), v.end());
    let new_end = algo::unique(&mut v, b, e);
    let keep = v.distance(v.begin(), new_end);
    while v.len() > keep {
        v.pop();
    }
    assert_eq!(v.as_slice(), &[1, 3, 5, 9]);
    assert!(algo::binary_search(&v, v.begin(), v.end(), &9));
}

#[test]
fn one_algorithm_three_storages() {
    let data = [4, 2, 7, 2, 5];

    let v = VecSeq::from_vec(data.to_vec());
    let mut d = DequeSeq::new();
    let mut l = NodeList::new();
    for x in data {
        d.push_back(x);
        l.push_back(x);
    }

    assert_eq!(algo::count(&v, v.begin(), v.end(), &2), 2);
    assert_eq!(v.get(algo::max_element(&v, v.begin(), v.end())), Some(&7));
    assert_eq!(algo::count(&d, d.begin(), d.end(), &2), 2);
    assert_eq!(d.get(algo::max_element(&d, d.begin(), d.end())), Some(&7));
    assert_eq!(algo::count(&l, l.begin(), l.end(), &2), 2);
    assert_eq!(l.get(algo::max_element(&l, l.begin(), l.end())), Some(&7));
}

#[test]
fn algorithms_run_over_map_entries() {
    let m: UniqueMap<&str, i32> = [("a", 3), ("b", 10), ("c", 7)].into_iter().collect();
    let n = algo::count_by(&m, m.begin(), m.end(), |(_, v)| *v > 5);
    assert_eq!(n, 2);
    let c = algo::find_by(&m, m.begin(), m.end(), |(k, _)| *k == "c");
    assert_eq!(Sequence::get(&m, c), Some(&("c", 7)));
    let best = algo::max_element_by(&m, m.begin(), m.end(), |a, b| a.1 < b.1);
    assert_eq!(Sequence::get(&m, best).unwrap().0, "b");
}

#[test]
fn rotate_reverse_round_trip_on_ring() {
    let mut d = DequeSeq::new();
    for x in 1..=6 {
        d.push_back(x);
    }
    let (b, e) = (d.begin(), d.end());
    let mid = d.advance(b, 2);
    algo::rotate(&mut d, b, mid, e);
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5, 6, 1, 2]);
    let (b, e) = (d.begin(), d.end());
    algo::reverse(&mut d, b, e);
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![2, 1, 6, 5, 4, 3]);
}

#[test]
fn heap_as_priority_queue() {
    let mut v = VecSeq::from_vec(vec![4, 8, 1, 6]);
    let (b, e) = (v.begin(), v.end());
    algo::make_heap(&mut v, b, e);

    let mut drained = Vec::new();
    while !v.is_empty() {
        let (b, e) = (v.begin(), v.end());
        algo::pop_heap(&mut v, b, e);
        drained.push(v.pop().unwrap());
    }
    assert_eq!(drained, vec![8, 6, 4, 1]);
}

#[test]
fn merge_across_storage_kinds() {
    let a: NodeList<i32> = [1, 4, 6].into_iter().collect();
    let mut b = DequeSeq::new();
    for x in [2, 4, 8] {
        b.push_back(x);
    }
    let mut dst = VecSeq::from_vec(vec![0; 6]);
    let o = dst.begin();
    let out = algo::merge(&a, a.begin(), a.end(), &b, b.begin(), b.end(), &mut dst, o);
    assert_eq!(out, dst.end());
    assert_eq!(dst.as_slice(), &[1, 2, 4, 4, 6, 8]);
}

#[test]
fn permutation_cycle_visits_every_ordering_once() {
    let mut v = VecSeq::from_vec(vec![1, 2, 3]);
    let mut orderings = vec![v.as_slice().to_vec()];
    let mut wraps = 0;
    for _ in 0..6 {
        let (b, e) = (v.begin(), v.end());
        if algo::next_permutation(&mut v, b, e) {
            orderings.push(v.as_slice().to_vec());
        } else {
            wraps += 1;
        }
    }
    assert_eq!(wraps, 1, "exactly one wraparound in a full cycle");
    assert_eq!(orderings.len(), 6);
    orderings.sort();
    orderings.dedup();
    assert_eq!(orderings.len(), 6);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn shuffle_then_sort_restores() {
    let mut v = VecSeq::from_vec((0..50).collect::<Vec<i32>>());
    let mut rng = StdRng::seed_from_u64(7);
    let (b, e) = (v.begin(), v.end());
    algo::shuffle(&mut v, b, e, &mut rng);
    assert_ne!(v.as_slice(), (0..50).collect::<Vec<i32>>().as_slice());
    let (b, e) = (v.begin(), v.end());
    algo::sort(&mut v, b, e);
    assert_eq!(v.as_slice(), (0..50).collect::<Vec<i32>>().as_slice());
}

#[test]
fn partition_then_point_agree() {
    let mut l: NodeList<i32> = (1..=10).collect();
    let (b, e) = (l.begin(), l.end());
    let split = algo::partition(&mut l, b, e, |x| x % 2 == 0);
    assert!(algo::is_partitioned(&l, l.begin(), l.end(), |x| x % 2 == 0));
    let point = algo::partition_point(&l, l.begin(), l.end(), |x| x % 2 == 0);
    assert_eq!(split, point);
    assert_eq!(l.distance(l.begin(), split), 5);
}
