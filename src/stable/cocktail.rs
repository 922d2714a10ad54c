use std::cmp::Ordering;

use crate::comparator::is_less_from;

sort_impl!("cocktail_stable");

/// Sorts `v` with cocktail shaker sort, a bubble sort that alternates the sweep direction.
///
/// Small elements near the end of the input move to the front in a single backward sweep,
/// where bubble sort needs one pass per position.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    cocktail_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    cocktail_sort(v, &mut is_less_from(compare));
}

fn cocktail_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Everything outside of v[start..end] is in its final position.
    let mut start = 0;
    let mut end = v.len();

    while end - start > 1 {
        // Forward sweep, carries the largest element to the end.
        let mut last_swap = start;
        for i in (start + 1)..end {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }
        end = last_swap;

        if end - start <= 1 {
            break;
        }

        // Backward sweep, carries the smallest element to the front.
        let mut first_swap = end;
        for i in ((start + 1)..end).rev() {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                first_swap = i;
            }
        }
        start = first_swap;
    }
}
