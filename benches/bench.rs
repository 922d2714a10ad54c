//! Criterion benches of every registered sort over the inputs of the perf report.
//!
//! `MEASURE_COMP=1` prints the mean comparison count of every `i32` input instead of timing.

use std::cell::Cell;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_algos::{stable, unstable};
use sort_test_tools::{patterns, Sort};

const LENS: [usize; 8] = [2, 8, 20, 64, 200, 500, 1_000, 10_000];

/// The perf report inputs under bench-friendly names.
fn shapes() -> [(&'static str, fn(usize) -> Vec<i32>); 5] {
    [
        ("random", patterns::random_distinct),
        ("sorted", patterns::ascending),
        ("nearly_sorted", |len| patterns::nearly_sorted(len, 20.0)),
        ("reversed", patterns::descending),
        ("few_unique", |len| patterns::few_unique(len, 10)),
    ]
}

/// Pins the calling thread to one core, once. Criterion is free to use other threads.
fn pin_to_bench_core() {
    const BENCH_CORE: usize = 2;

    thread_local! { static PINNED: Cell<bool> = Cell::new(false); }

    PINNED.with(|pinned| {
        if pinned.replace(true) {
            return;
        }

        if let Some(core_id) = core_affinity::get_core_ids()
            .as_ref()
            .and_then(|ids| ids.get(BENCH_CORE))
        {
            core_affinity::set_for_current(*core_id);
        }
    });
}

fn print_mean_comparisons<S: Sort>(id: &str, make: fn(usize) -> Vec<i32>, len: usize) {
    let runs: u64 = if len <= 64 { 1_000 } else { 20 };

    let mut comps = 0u64;
    for _ in 0..runs {
        let mut v = make(len);
        S::sort_by(black_box(v.as_mut_slice()), |a, b| {
            comps += 1;
            a.cmp(b)
        });
    }

    println!("{id}: mean comparisons: {}", comps / runs);
}

#[inline(never)]
fn bench_sort<T: Ord, S: Sort>(
    c: &mut Criterion,
    type_name: &str,
    convert: fn(Vec<i32>) -> Vec<T>,
) {
    let measure_comps = env::var_os("MEASURE_COMP").is_some();

    for (shape, make) in shapes() {
        for len in LENS {
            let id = format!("{}-{type_name}-{shape}-{len}", S::name());

            if measure_comps {
                // The count does not depend on the element type.
                if type_name == "i32" {
                    print_mean_comparisons::<S>(&id, make, len);
                }
                continue;
            }

            pin_to_bench_core();

            let batch_size = if len > 30 {
                BatchSize::LargeInput
            } else {
                BatchSize::SmallInput
            };

            c.bench_function(&id, |b| {
                b.iter_batched(
                    || convert(make(len)),
                    |mut v| S::sort(black_box(v.as_mut_slice())),
                    batch_size,
                )
            });
        }
    }
}

fn bench_registry<T: Ord>(c: &mut Criterion, type_name: &str, convert: fn(Vec<i32>) -> Vec<T>) {
    bench_sort::<T, stable::bubble::SortImpl>(c, type_name, convert);
    bench_sort::<T, stable::selection::SortImpl>(c, type_name, convert);
    bench_sort::<T, stable::cocktail::SortImpl>(c, type_name, convert);
    bench_sort::<T, stable::insertion::SortImpl>(c, type_name, convert);
    bench_sort::<T, stable::natural_merge::SortImpl>(c, type_name, convert);

    bench_sort::<T, unstable::comb::SortImpl>(c, type_name, convert);
    bench_sort::<T, unstable::shell::ciura_gaps::SortImpl>(c, type_name, convert);
    bench_sort::<T, unstable::shell::shell_gaps::SortImpl>(c, type_name, convert);
    bench_sort::<T, unstable::shell::knuth_gaps::SortImpl>(c, type_name, convert);
    bench_sort::<T, unstable::shell::tokuda_gaps::SortImpl>(c, type_name, convert);
}

fn criterion_benchmark(c: &mut Criterion) {
    // Every iteration sorts a fresh input.
    patterns::use_random_seed_each_time();

    bench_registry::<i32>(c, "i32", |v| v);

    // Spread over the u64 range, the order of the values is kept.
    bench_registry::<u64>(c, "u64", |v| {
        v.into_iter()
            .map(|val| ((val as i64 - i32::MIN as i64) as u64) << 31)
            .collect()
    });

    // Not Copy, and every comparison goes through the heap.
    bench_registry::<String>(c, "string", |v| {
        v.into_iter().map(|val| format!("{val:010}")).collect()
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
