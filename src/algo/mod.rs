//! Generic algorithms over cursor ranges.
//!
//! Every function here takes a container reference plus a half-open
//! `[first, last)` cursor pair and relies only on the traits in
//! [`crate::cursor`], so one implementation serves contiguous, ring, and
//! linked storage alike. Plain variants lean on `Ord`/`PartialEq`; `_by`
//! variants accept the comparator or predicate explicitly.

pub mod binary;
pub mod modify;
pub mod permute;
pub mod search;
pub mod setops;
pub mod sort;

pub use binary::{
    binary_search, binary_search_by, equal_range, equal_range_by, is_partitioned, lower_bound,
    lower_bound_by, partition, partition_copy, partition_point, stable_partition, upper_bound,
    upper_bound_by,
};
pub use modify::{
    copy, copy_if, copy_n, fill, fill_n, generate, remove, remove_by, remove_copy, remove_copy_by,
    replace, replace_by, replace_copy, reverse, reverse_copy, rotate, rotate_copy, shuffle,
    swap_ranges, transform, unique, unique_by, unique_copy, unique_copy_by,
};
pub use permute::{
    next_permutation, next_permutation_by, prev_permutation, prev_permutation_by,
};
pub use search::{
    adjacent_find, adjacent_find_by, all_of, any_of, count, count_by, equal, find, find_by,
    find_by_not, find_end, find_first_of, for_each, max_element, max_element_by, min_element,
    min_element_by, minmax_element, minmax_element_by, mismatch, none_of, search, search_n,
};
pub use setops::{
    includes, includes_by, merge, merge_by, set_difference, set_difference_by, set_intersection,
    set_intersection_by, set_symmetric_difference, set_symmetric_difference_by, set_union,
    set_union_by,
};
pub use sort::{
    is_sorted, is_sorted_by, is_sorted_until, is_sorted_until_by, make_heap, make_heap_by,
    partial_sort, partial_sort_by, pop_heap, pop_heap_by, push_heap, push_heap_by, sort, sort_by,
    sort_heap, sort_heap_by,
};
