//! Seeded `i32` inputs for the test suite, the benches and the perf report.
//!
//! Every random shape is derived from one seed. By default that seed is drawn once per process
//! and printed by the test suite, `OVERRIDE_SEED=<u64>` pins it so a failure can be replayed.
//! Benches and the perf report switch to a fresh seed per call with
//! [`use_random_seed_each_time`].

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{thread_rng, Rng, SeedableRng};

/// Upper bound (exclusive) for the values of [`random_distinct`], and so for its length.
pub const DISTINCT_VALUE_RANGE: usize = 1_000_000_000;

/// Arbitrary `i32` values, duplicates are possible but rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Values drawn uniformly from `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    dist.sample_iter(rng()).take(len).collect()
}

/// `len` pairwise distinct values from `0..DISTINCT_VALUE_RANGE`, in random order.
///
/// Panics if `len` exceeds [`DISTINCT_VALUE_RANGE`].
pub fn random_distinct(len: usize) -> Vec<i32> {
    assert!(
        len <= DISTINCT_VALUE_RANGE,
        "random_distinct: {len} values requested, only {DISTINCT_VALUE_RANGE} exist"
    );

    index::sample(&mut rng(), DISTINCT_VALUE_RANGE, len)
        .into_iter()
        .map(|val| val as i32)
        .collect()
}

/// Like [`random_distinct`], folded onto `distinct` values.
pub fn few_unique(len: usize, distinct: usize) -> Vec<i32> {
    let distinct = distinct.clamp(1, i32::MAX as usize) as i32;

    random_distinct(len)
        .into_iter()
        .map(|val| val % distinct)
        .collect()
}

/// `0..len` with every value shifted by a random offset below `displacement_percent` of `len`.
pub fn nearly_sorted(len: usize, displacement_percent: f64) -> Vec<i32> {
    let max_offset = (len as f64 * displacement_percent / 100.0) as i32;
    if max_offset == 0 {
        return ascending(len);
    }

    random_uniform(len, -max_offset..max_offset)
        .into_iter()
        .zip(0..)
        .map(|(offset, val)| val + offset)
        .collect()
}

/// Random values cut into `run_count` chunks of equal length, each sorted ascending.
pub fn sorted_runs(len: usize, run_count: usize) -> Vec<i32> {
    let mut v = random(len);
    let run_len = len.div_ceil(run_count.max(1)).max(1);

    for run in v.chunks_mut(run_len) {
        run.sort_unstable();
    }

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Makes every later pattern call draw a fresh seed instead of the per process one.
///
/// Panics if `OVERRIDE_SEED` is set, the two contradict each other.
pub fn use_random_seed_each_time() {
    if let Seed::Override(seed) = process_seed() {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED={seed}");
    }

    FRESH_SEED_PER_CALL.store(true, Ordering::Relaxed);
}

/// The seed every random pattern of this process derives from.
pub fn random_init_seed() -> u64 {
    if FRESH_SEED_PER_CALL.load(Ordering::Relaxed) {
        return thread_rng().gen();
    }

    match process_seed() {
        Seed::Override(seed) | Seed::Process(seed) => seed,
    }
}

#[derive(Clone, Copy)]
enum Seed {
    Override(u64),
    Process(u64),
}

static PROCESS_SEED: OnceCell<Seed> = OnceCell::new();
static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

fn process_seed() -> Seed {
    *PROCESS_SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => match seed.parse() {
            Ok(seed) => Seed::Override(seed),
            Err(_) => panic!("OVERRIDE_SEED must be a u64, got '{seed}'"),
        },
        Err(_) => Seed::Process(thread_rng().gen()),
    })
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
