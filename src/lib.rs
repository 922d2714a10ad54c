//! Comparator-parameterized in-place sorting algorithms.
//!
//! Every algorithm lives in its own module and exposes the same two entry points:
//!
//! - `sort(v)` orders `v` by the natural order of `T: Ord`.
//! - `sort_by(v, compare)` orders `v` by a three-way `compare` function.
//!
//! Stable algorithms are grouped under [`stable`], algorithms that may reorder equal elements
//! under [`unstable`]. Each module additionally provides a `SortImpl` type that implements
//! [`sort_test_tools::Sort`], which is how benches, tests and the perf report enumerate them.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod comparator;
pub mod error;
pub mod stable;
pub mod unstable;

mod hole;

pub use error::SortError;
pub use unstable::shell::GapStrategy;
