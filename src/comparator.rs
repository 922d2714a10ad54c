//! The comparator contract shared by all algorithms.
//!
//! Callers hand in a three-way `FnMut(&T, &T) -> Ordering`. Internally every algorithm only ever
//! asks one question, "is `a` strictly less than `b`", so the public entry points convert the
//! three-way function into an `is_less` predicate once and pass that down by `&mut`.
//!
//! The comparator must describe a strict total order. This is not checked. A comparator that
//! violates it yields an unspecified order, but never an out of bounds access, a lost or
//! duplicated element, or a non-terminating sort.

use std::cmp::Ordering;

/// The default comparator, the natural order of `T`.
#[inline]
pub fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Turns a three-way comparator into the strict less-than predicate the algorithms work with.
#[inline]
pub(crate) fn is_less_from<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| compare(a, b) == Ordering::Less
}

/// Returns `true` if no element of `v` compares `Greater` than any element after it.
///
/// Checking adjacent pairs is enough for a transitive `compare`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
