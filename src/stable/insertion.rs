use std::cmp::Ordering;

use crate::comparator::is_less_from;
use crate::hole::insert_tail;

sort_impl!("insertion_stable");

/// Sorts `v` with insertion sort.
///
/// Adaptive: a sorted input costs *n* - 1 comparisons and no moves, the worst case is
/// *O*(*n*^2).
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut is_less_from(compare));
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Shift each element of the unsorted region v[i..] as far left as is needed to make v[..=i]
    // sorted.
    for i in 1..v.len() {
        // SAFETY: 1 <= i < v.len().
        unsafe {
            insert_tail(v, i, 1, is_less);
        }
    }
}
