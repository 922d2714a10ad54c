//! Shell sort with selectable gap sequences.
//!
//! Every gap `g` of the sequence runs an insertion sort with stride `g` over the `g` interleaved
//! sub-sequences of the input. The sequence always ends with `g == 1`, a plain insertion sort
//! over input that the earlier passes left nearly sorted.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::is_less_from;
use crate::error::SortError;
use crate::hole::insert_tail;

/// Marc Ciura's empirically derived gap sequence.
const CIURA_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Named gap sequence for shell sort.
///
/// Parsed from its name with [`FromStr`]. A name that is not listed here is
/// [`SortError::InvalidArgument`], a listed strategy that has no implementation fails with
/// [`SortError::NotSupported`] when it is used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GapStrategy {
    /// `701, 301, 132, 57, 23, 10, 4, 1`, gaps not smaller than the input length are skipped.
    #[default]
    Ciura,
    /// Shell's original halving sequence, `len / 2, len / 4, .., 1`.
    Shell,
    /// `(3^k - 1) / 2`, starting with the first term not below `len / 3`.
    Knuth,
    /// `ceil((9^k - 4^k) / (5 * 4^(k - 1)))`, starting below `len`.
    Tokuda,
    /// Pratt's 3-smooth numbers. Not implemented.
    Pratt,
}

impl GapStrategy {
    pub const ALL: [GapStrategy; 5] = [
        GapStrategy::Ciura,
        GapStrategy::Shell,
        GapStrategy::Knuth,
        GapStrategy::Tokuda,
        GapStrategy::Pratt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GapStrategy::Ciura => "cuira",
            GapStrategy::Shell => "shell",
            GapStrategy::Knuth => "knuth",
            GapStrategy::Tokuda => "tokuda",
            GapStrategy::Pratt => "pratt",
        }
    }

    /// Lazily produces the gaps this strategy uses for an input of length `len`, largest first.
    pub fn gaps(self, len: usize) -> Result<Gaps, SortError> {
        Ok(self.source()?.gaps(len))
    }

    fn source(self) -> Result<GapSource, SortError> {
        match self {
            GapStrategy::Ciura => Ok(GapSource::Ciura),
            GapStrategy::Shell => Ok(GapSource::Shell),
            GapStrategy::Knuth => Ok(GapSource::Knuth),
            GapStrategy::Tokuda => Ok(GapSource::Tokuda),
            GapStrategy::Pratt => Err(SortError::not_supported(format!(
                "gap strategy '{}' is not implemented",
                self.name()
            ))),
        }
    }
}

impl fmt::Display for GapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GapStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The correct spelling is accepted as well.
        if s == "ciura" {
            return Ok(GapStrategy::Ciura);
        }

        GapStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                let known = GapStrategy::ALL.map(GapStrategy::name).join(", ");
                SortError::invalid_argument(format!(
                    "unknown gap strategy '{s}', expected one of: {known}"
                ))
            })
    }
}

/// The gap sequences that have an implementation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum GapSource {
    Ciura,
    Shell,
    Knuth,
    Tokuda,
}

impl GapSource {
    fn gaps(self, len: usize) -> Gaps {
        let cursor = match self {
            GapSource::Ciura => CIURA_GAPS
                .iter()
                .position(|&gap| gap < len)
                .unwrap_or(CIURA_GAPS.len()),
            GapSource::Shell => len / 2,
            GapSource::Knuth => {
                if len < 2 {
                    0
                } else {
                    let mut gap = 1;
                    while gap < len / 3 {
                        gap = 3 * gap + 1;
                    }
                    gap
                }
            }
            GapSource::Tokuda => {
                if len < 2 {
                    0
                } else {
                    let mut k = 1;
                    while matches!(tokuda_gap(k + 1), Some(gap) if gap < len) {
                        k += 1;
                    }
                    k as usize
                }
            }
        };

        Gaps {
            source: self,
            cursor,
        }
    }
}

/// `ceil((9^k - 4^k) / (5 * 4^(k - 1)))`, `None` if it does not fit.
fn tokuda_gap(k: u32) -> Option<usize> {
    debug_assert!(k >= 1);

    let num = 9u128.checked_pow(k)? - 4u128.checked_pow(k)?;
    let den = 5 * 4u128.checked_pow(k - 1)?;

    usize::try_from((num + den - 1) / den).ok()
}

/// Iterator over the gaps of one shell sort invocation, largest first, ending with 1.
///
/// Gaps are computed on demand.
#[derive(Clone, Debug)]
pub struct Gaps {
    source: GapSource,
    // Ciura: index of the next gap. Shell and Knuth: the next gap, 0 when done.
    // Tokuda: k of the next gap, 0 when done.
    cursor: usize,
}

impl Iterator for Gaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.source {
            GapSource::Ciura => {
                let gap = *CIURA_GAPS.get(self.cursor)?;
                self.cursor += 1;
                Some(gap)
            }
            GapSource::Shell => {
                let gap = self.cursor;
                if gap == 0 {
                    return None;
                }
                self.cursor = gap / 2;
                Some(gap)
            }
            GapSource::Knuth => {
                let gap = self.cursor;
                if gap == 0 {
                    return None;
                }
                self.cursor = (gap - 1) / 3;
                Some(gap)
            }
            GapSource::Tokuda => {
                if self.cursor == 0 {
                    return None;
                }
                let gap = tokuda_gap(self.cursor as u32)?;
                self.cursor -= 1;
                Some(gap)
            }
        }
    }
}

/// Sorts `v` with shell sort using the Ciura gap sequence.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, GapSource::Ciura.gaps(v.len()), &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, GapSource::Ciura.gaps(v.len()), &mut is_less_from(compare));
}

/// Sorts `v` with shell sort using the gaps of `strategy`.
///
/// Fails without touching `v` if `strategy` is not implemented.
pub fn sort_with_gaps<T>(v: &mut [T], strategy: GapStrategy) -> Result<(), SortError>
where
    T: Ord,
{
    let gaps = strategy.gaps(v.len())?;
    shell_sort(v, gaps, &mut |a, b| a.lt(b));

    Ok(())
}

pub fn sort_by_with_gaps<T, F>(
    v: &mut [T],
    strategy: GapStrategy,
    compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let gaps = strategy.gaps(v.len())?;
    shell_sort(v, gaps, &mut is_less_from(compare));

    Ok(())
}

fn shell_sort<T, F>(v: &mut [T], gaps: Gaps, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for gap in gaps {
        debug_assert!(gap != 0);

        // Insert every element into the already sorted part of its own chain. This interleaves
        // the `gap` insertion sorts instead of running them one after another.
        for i in gap..len {
            // SAFETY: gap != 0 and gap <= i < len.
            unsafe {
                insert_tail(v, i, gap, is_less);
            }
        }
    }
}

macro_rules! gap_strategy_sort_impl {
    ($($strategy:ident),*) => {
        paste::paste! {
            $(
                #[doc = "Shell sort registry entry for [`GapStrategy::" $strategy "`]."]
                pub mod [<$strategy:snake _gaps>] {
                    use std::cmp::Ordering;

                    use super::{GapSource, GapStrategy};
                    use crate::comparator::is_less_from;

                    sort_impl!(format!("shell_{}_unstable", GapStrategy::$strategy));

                    #[inline]
                    pub fn sort<T>(v: &mut [T])
                    where
                        T: Ord,
                    {
                        super::shell_sort(v, GapSource::$strategy.gaps(v.len()), &mut |a, b| {
                            a.lt(b)
                        });
                    }

                    #[inline]
                    pub fn sort_by<T, F>(v: &mut [T], compare: F)
                    where
                        F: FnMut(&T, &T) -> Ordering,
                    {
                        super::shell_sort(
                            v,
                            GapSource::$strategy.gaps(v.len()),
                            &mut is_less_from(compare),
                        );
                    }
                }
            )*
        }
    };
}

gap_strategy_sort_impl!(Ciura, Shell, Knuth, Tokuda);
