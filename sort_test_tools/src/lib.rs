//! Shared input patterns and the generic test suite every sort implementation is checked against.

use std::cmp::Ordering;

/// Uniform handle on a sort implementation, used by tests, benches and the perf report.
///
/// Implementations whose `name` contains `"unstable"` are exempt from the stability tests.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
