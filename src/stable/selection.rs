use std::cmp::Ordering;

use crate::comparator::is_less_from;

sort_impl!("selection_stable");

/// Sorts `v` with selection sort.
///
/// Always performs *n*(*n* - 1) / 2 comparisons, regardless of the input order. The minimum is
/// rotated into place rather than swapped, which keeps the sort stable at the cost of *O*(*n*^2)
/// element moves in the worst case instead of *O*(*n*) swaps.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut is_less_from(compare));
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for pos in 0..(len - 1) {
        // Only a strictly smaller element replaces the current minimum, so among equal minima the
        // leftmost one is selected.
        let mut min = pos;
        for i in (pos + 1)..len {
            if is_less(&v[i], &v[min]) {
                min = i;
            }
        }

        if min != pos {
            // A plain swap would carry v[pos] past elements equal to it. Rotating moves the
            // minimum into place and shifts v[pos..min] right by one, preserving their order.
            v[pos..=min].rotate_right(1);
        }
    }
}
