//! Hole based insertion shared by insertion sort and shell sort.

use std::mem;
use std::ptr;

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

/// Inserts `v[tail]` into the already sorted chain `.., v[tail - 2 * gap], v[tail - gap]` so that
/// the chain up to and including `tail` becomes sorted. With `gap == 1` this is the inner step of
/// plain insertion sort.
///
/// Elements are only moved once it is known that `v[tail]` is out of place, an element that is
/// already in order costs exactly one comparison and no moves.
///
/// # Safety
///
/// `gap` must be non-zero and `gap <= tail < v.len()` must hold.
pub(crate) unsafe fn insert_tail<T, F>(v: &mut [T], tail: usize, gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap != 0 && tail >= gap && tail < v.len());

    let arr_ptr = v.as_mut_ptr();

    // SAFETY: caller guarantees that `tail` and `tail - gap` are in bounds, and every index the
    // loop below touches lies between those two and 0.
    unsafe {
        let tail_ptr = arr_ptr.add(tail);

        // Compare through `tail_ptr` and not a copy, if the element stays where it is the
        // comparison must have seen the value that stays in `v`.
        if !is_less(&*tail_ptr, &*tail_ptr.sub(gap)) {
            return;
        }

        // From here on `tmp` is the value that is compared and the value that is written back.
        let tmp = mem::ManuallyDrop::new(ptr::read(tail_ptr));

        // If `is_less` panics, `hole` is dropped and fills the gap in `v` with `tmp`, so `v` still
        // holds every element it held initially exactly once.
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: tail_ptr.sub(gap),
        };
        ptr::copy_nonoverlapping(hole.dest, tail_ptr, 1);

        let mut hole_idx = tail - gap;
        while hole_idx >= gap {
            let prev_ptr = arr_ptr.add(hole_idx - gap);
            if !is_less(&*tmp, &*prev_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(prev_ptr, hole.dest, 1);
            hole.dest = prev_ptr;
            hole_idx -= gap;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
    }
}
