use std::cmp::Ordering;

use crate::comparator::is_less_from;

sort_impl!("comb_unstable");

/// The gap shrinks by this factor after every pass.
const SHRINK_FACTOR: f64 = 1.3;

/// Sorts `v` with comb sort.
///
/// Bubble sort that compares elements `gap` apart, starting with `gap == len` and shrinking it
/// after every pass. Once the gap reaches 1 the passes are plain bubble sort passes and the sort
/// ends with the first one that swaps nothing.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    comb_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    comb_sort(v, &mut is_less_from(compare));
}

fn comb_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut gap = len;

    // Only meaningful once gap == 1, v[end..] is then sorted and in its final position.
    let mut end = len;

    while end > 1 {
        gap = shrink(gap);

        if gap > 1 {
            for i in gap..len {
                if is_less(&v[i], &v[i - gap]) {
                    v.swap(i - gap, i);
                }
            }
        } else {
            let mut last_swap = 0;

            for i in 1..end {
                if is_less(&v[i], &v[i - 1]) {
                    v.swap(i - 1, i);
                    last_swap = i;
                }
            }

            end = last_swap;
        }
    }
}

#[inline]
fn shrink(gap: usize) -> usize {
    ((gap as f64 / SHRINK_FACTOR) as usize).max(1)
}
