use std::cmp::Ordering;

use crate::comparator::is_less_from;

sort_impl!("bubble_stable");

/// Sorts `v` with bubble sort.
///
/// Each pass swaps adjacent out of order pairs and remembers where the last swap happened,
/// everything after it is already in its final position. *O*(*n*^2) worst case, a single pass
/// for sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut is_less_from(compare));
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // v[end..] is sorted and in its final position.
    let mut end = v.len();

    while end > 1 {
        let mut last_swap = 0;

        for i in 1..end {
            // Only strictly smaller elements move left, equal neighbours keep their order.
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }

        // A pass without swaps yields 0 and ends the sort.
        end = last_swap;
    }
}
