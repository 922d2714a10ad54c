//! Wall clock measurement of a single sort call.

use std::time::{Duration, Instant};

/// Runs `sort_call` once and returns how long it took on the monotonic clock.
#[inline(never)]
pub fn measure_duration(sort_call: impl FnOnce()) -> Duration {
    serialize_instructions();
    let start = Instant::now();

    sort_call();

    let elapsed = start.elapsed();
    serialize_instructions();

    elapsed
}

/// Keeps the CPU from moving work across a clock read.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn serialize_instructions() {
    // SAFETY: lfence is part of SSE2, which every x86_64 CPU has.
    unsafe { std::arch::x86_64::_mm_lfence() }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
fn serialize_instructions() {}

/// Pins the current thread to core 2, or the last core on smaller machines. Returns whether the
/// thread is pinned.
pub fn pin_thread_to_core() -> bool {
    const PREFERRED_CORE: usize = 2;

    let Some(core_ids) = core_affinity::get_core_ids() else {
        return false;
    };

    let Some(core_id) = core_ids.get(PREFERRED_CORE).or(core_ids.last()) else {
        return false;
    };

    core_affinity::set_for_current(*core_id);

    true
}
