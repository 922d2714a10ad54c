//! Natural merge sort.
//!
//! Instead of splitting the input into fixed size blocks, every round scans the working sequence
//! for maximal non-decreasing runs and merges them pairwise into a second buffer. The buffer then
//! becomes the working sequence for the next round. Sorted input is recognized with *n* - 1
//! comparisons and never allocates, every other input allocates one buffer of length *n* and
//! finishes in *O*(*n* \* log(*n*)).

use std::cmp::Ordering;
use std::mem;
use std::ptr;
use std::slice;

use crate::comparator::is_less_from;
use crate::error::SortError;

sort_impl!("natural_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    natural_merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    natural_merge_sort(v, &mut is_less_from(compare));
}

fn natural_merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let mut runs = RunCursor::new();
    let Some(first) = runs.next_run(v, is_less) else {
        return;
    };

    if first.to + 1 == v.len() {
        // Already sorted, nothing to merge and no reason to allocate.
        return;
    }

    if let Err(err) = merge_rounds(v, runs, first, is_less) {
        // Runs come from `RunCursor`, a malformed one is a bug in this module.
        panic!("natural merge sort: {err}");
    }
}

/// Repeats detect and merge rounds until the working sequence is a single run, and leaves the
/// result in `v`.
///
/// `runs` continues the scan of the first round just after `first`.
fn merge_rounds<T, F>(
    v: &mut [T],
    mut runs: RunCursor,
    first: Run,
    is_less: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // The buffer keeps length 0. It only ever holds bitwise copies of the elements of `v`, so no
    // destructor can run on a duplicate, even if `is_less` panics. Declared before `slots` so it
    // outlives the pointer into it.
    let mut buf = Vec::<T>::with_capacity(len);

    // From here on `v` is only accessed through `slots`. If this function is left early, by error
    // or by a panic in `is_less`, dropping `slots` puts the complete set of elements back into `v`.
    let mut slots = PingPong {
        caller: v.as_mut_ptr(),
        buffer: buf.as_mut_ptr(),
        len,
        current: Slot::Caller,
    };

    let mut pending = Some(first);
    let mut prev_run_count = usize::MAX;

    loop {
        let (src, dst) = slots.src_and_dst();
        // SAFETY: `src` is valid for `len` initialized elements, the first round reads `v` and
        // every later round reads a buffer a previous round completely filled.
        let src_seq = unsafe { slice::from_raw_parts(src, len) };

        let mut run_count = 0;
        loop {
            let next_left = match pending.take() {
                Some(run) => Some(run),
                None => runs.next_run(src_seq, is_less),
            };
            let Some(left) = next_left else {
                break;
            };
            run_count += 1;

            match runs.next_run(src_seq, is_less) {
                Some(right) => {
                    run_count += 1;
                    // SAFETY: both slots are valid for `len` elements and never overlap.
                    unsafe {
                        merge_runs(src, len, dst, len, left, right, is_less)?;
                    }
                }
                None if run_count == 1 => {
                    // The whole working sequence is one run.
                    return Ok(());
                }
                None => {
                    // Odd run out, carried forward unchanged.
                    // SAFETY: `left` lies within both slots, see above.
                    unsafe {
                        ptr::copy_nonoverlapping(
                            src.add(left.from),
                            dst.add(left.from),
                            left.len(),
                        );
                    }
                }
            }
        }

        slots.flip();

        // Two runs merged into one finish the sort. For a strict total order every round at least
        // halves the run count, a round that does not shrink it means `is_less` is not one, and
        // continuing might never terminate.
        if run_count <= 2 || run_count >= prev_run_count {
            return Ok(());
        }

        prev_run_count = run_count;
        runs = RunCursor::new();
    }
    // `slots` gets dropped and copies the result back into `v` if it ended up in `buf`.
}

/// Inclusive index interval `[from, to]` of a non-decreasing run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Run {
    from: usize,
    to: usize,
}

impl Run {
    fn len(&self) -> usize {
        self.to - self.from + 1
    }
}

/// Finds maximal non-decreasing runs left to right, one per call. Nothing past the end of the
/// returned run is inspected.
#[derive(Debug)]
struct RunCursor {
    pos: usize,
}

impl RunCursor {
    fn new() -> Self {
        Self { pos: 0 }
    }

    fn next_run<T, F>(&mut self, v: &[T], is_less: &mut F) -> Option<Run>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = v.len();
        if self.pos >= len {
            return None;
        }

        let from = self.pos;
        let mut to = from;
        while to + 1 < len && !is_less(&v[to + 1], &v[to]) {
            to += 1;
        }

        self.pos = to + 1;
        Some(Run { from, to })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Slot {
    Caller,
    Buffer,
}

/// The two sequences natural merge sort alternates between. `current` holds the authoritative
/// copy of every element. When dropped, copies `buffer` into `caller` if `current` is
/// `Slot::Buffer`.
struct PingPong<T> {
    caller: *mut T,
    buffer: *mut T,
    len: usize,
    current: Slot,
}

impl<T> PingPong<T> {
    fn src_and_dst(&self) -> (*const T, *mut T) {
        match self.current {
            Slot::Caller => (self.caller, self.buffer),
            Slot::Buffer => (self.buffer, self.caller),
        }
    }

    fn flip(&mut self) {
        self.current = match self.current {
            Slot::Caller => Slot::Buffer,
            Slot::Buffer => Slot::Caller,
        };
    }
}

impl<T> Drop for PingPong<T> {
    fn drop(&mut self) {
        if self.current == Slot::Buffer {
            // SAFETY: `buffer` holds a complete bitwise copy of the elements, the stale copies in
            // `caller` are overwritten without being dropped.
            unsafe {
                ptr::copy_nonoverlapping(self.buffer, self.caller, self.len);
            }
        }
    }
}

/// Merges the adjacent runs `left` and `right` of `src` into the same index range of `dst`.
///
/// On equal elements the one from `left` is taken first, which keeps the merge stable. The run
/// intervals and lengths are checked before anything is read or written.
///
/// # Safety
///
/// `src` must be valid for reads of `src_len` elements and `dst` valid for writes of `dst_len`
/// elements, the two must not overlap and `T` must not be a zero-sized type.
unsafe fn merge_runs<T, F>(
    src: *const T,
    src_len: usize,
    dst: *mut T,
    dst_len: usize,
    left: Run,
    right: Run,
    is_less: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    if src_len != dst_len {
        return Err(SortError::invalid_argument(format!(
            "merge buffer length {dst_len} does not match sequence length {src_len}"
        )));
    }

    for run in [left, right] {
        if run.from > run.to {
            return Err(SortError::invalid_argument(format!(
                "malformed run [{}, {}]",
                run.from, run.to
            )));
        }
    }

    if right.from != left.to + 1 {
        return Err(SortError::invalid_argument(format!(
            "runs [{}, {}] and [{}, {}] are not adjacent",
            left.from, left.to, right.from, right.to
        )));
    }

    if right.to >= src_len {
        return Err(SortError::invalid_argument(format!(
            "run [{}, {}] out of bounds for length {src_len}",
            right.from, right.to
        )));
    }

    // SAFETY: the checks above keep every pointer within `left.from..=right.to`, which is in
    // bounds for both sequences.
    unsafe {
        let mut l = src.add(left.from);
        let l_end = src.add(left.to + 1);
        let mut r = src.add(right.from);
        let r_end = src.add(right.to + 1);
        let mut out = dst.add(left.from);

        while l < l_end && r < r_end {
            // Consume the lesser side. If equal, prefer the left run to maintain stability.
            let to_copy = if is_less(&*r, &*l) {
                let taken = r;
                r = r.add(1);
                taken
            } else {
                let taken = l;
                l = l.add(1);
                taken
            };
            ptr::copy_nonoverlapping(to_copy, out, 1);
            out = out.add(1);
        }

        // One side is exhausted, whatever remains of the other is already in order.
        let l_rest = l_end.offset_from(l) as usize;
        ptr::copy_nonoverlapping(l, out, l_rest);
        out = out.add(l_rest);

        let r_rest = r_end.offset_from(r) as usize;
        ptr::copy_nonoverlapping(r, out, r_rest);
    }

    Ok(())
}
