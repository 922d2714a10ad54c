//! Times the sort implementations on growing inputs of five shapes and writes a CSV report.
//!
//! Usage: `perf-report [output.csv] [max_len] [step]`
//!
//! Every length from `step` up to, but not including, `max_len` is measured in increments of
//! `step`. By default comb sort, shell sort and insertion sort are measured, `SORT_FILTER=<text>`
//! instead selects every registered implementation whose name contains `<text>`.

mod measure;

use std::env;
use std::error::Error;
use std::fs::File;
use std::hint::black_box;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use sort_algos::comparator::{is_sorted_by, natural_order};
use sort_algos::{stable, unstable};
use sort_test_tools::{patterns, Sort};

use crate::measure::{measure_duration, pin_thread_to_core};

const CSV_HEADER: &str = "Algorithm,Range size,Random,Sorted,Nearly sorted,Reversed,Few unique";

#[derive(Debug)]
struct Config {
    output: PathBuf,
    max_len: usize,
    step: usize,
    filter: Option<String>,
}

impl Config {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, Box<dyn Error>> {
        let output = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("performance.csv"));

        let max_len = match args.next() {
            Some(arg) => arg
                .parse()
                .map_err(|err| format!("invalid max_len '{arg}': {err}"))?,
            None => 10_000,
        };

        let step = match args.next() {
            Some(arg) => arg
                .parse()
                .map_err(|err| format!("invalid step '{arg}': {err}"))?,
            None => 100,
        };

        if step == 0 {
            return Err("step must be larger than 0".into());
        }

        // The random input holds pairwise distinct values, there are only so many.
        if max_len > patterns::DISTINCT_VALUE_RANGE {
            return Err(format!(
                "max_len {max_len} is larger than {}",
                patterns::DISTINCT_VALUE_RANGE
            )
            .into());
        }

        let filter = env::var("SORT_FILTER").ok().filter(|filter| !filter.is_empty());

        Ok(Self {
            output,
            max_len,
            step,
            filter,
        })
    }
}

struct Entry {
    name: String,
    sort: fn(&mut [i32]),
    default: bool,
}

fn entry<S: Sort>(default: bool) -> Entry {
    Entry {
        name: S::name(),
        sort: S::sort::<i32>,
        default,
    }
}

fn registry() -> Vec<Entry> {
    vec![
        entry::<unstable::comb::SortImpl>(true),
        entry::<unstable::shell::ciura_gaps::SortImpl>(true),
        entry::<stable::insertion::SortImpl>(true),
        entry::<unstable::shell::shell_gaps::SortImpl>(false),
        entry::<unstable::shell::knuth_gaps::SortImpl>(false),
        entry::<unstable::shell::tokuda_gaps::SortImpl>(false),
        entry::<stable::bubble::SortImpl>(false),
        entry::<stable::selection::SortImpl>(false),
        entry::<stable::cocktail::SortImpl>(false),
        entry::<stable::natural_merge::SortImpl>(false),
    ]
}

/// The measured input shapes, in CSV column order.
fn inputs() -> [(&'static str, fn(usize) -> Vec<i32>); 5] {
    [
        ("random", patterns::random_distinct),
        ("sorted", patterns::ascending),
        ("nearly sorted", |len| patterns::nearly_sorted(len, 20.0)),
        ("reversed", patterns::descending),
        ("few unique", |len| patterns::few_unique(len, 10)),
    ]
}

fn measure_row(entry: &Entry, len: usize) -> Result<Vec<f64>, Box<dyn Error>> {
    inputs()
        .into_iter()
        .map(|(input_name, pattern)| -> Result<f64, Box<dyn Error>> {
            let mut v = pattern(len);

            let duration = measure_duration(|| (entry.sort)(black_box(v.as_mut_slice())));

            if !is_sorted_by(&v, natural_order) {
                return Err(format!(
                    "{} left the {input_name} input of length {len} unsorted",
                    entry.name
                )
                .into());
            }

            Ok(duration.as_secs_f64())
        })
        .collect()
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let entries = registry()
        .into_iter()
        .filter(|entry| match &config.filter {
            Some(filter) => entry.name.contains(filter.as_str()),
            None => entry.default,
        })
        .collect::<Vec<_>>();

    if entries.is_empty() {
        return Err(format!("no sort implementation matches {:?}", config.filter).into());
    }

    if env::var_os("OVERRIDE_SEED").is_none() {
        // Fresh input for every measurement instead of one seed per process.
        patterns::use_random_seed_each_time();
    }

    if !pin_thread_to_core() {
        eprintln!("Could not pin the thread to a core, expect noisier results.");
    }

    let file = File::create(&config.output)
        .map_err(|err| format!("could not create '{}': {err}", config.output.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{CSV_HEADER}")?;

    for entry in &entries {
        for len in (config.step..config.max_len).step_by(config.step) {
            let row = measure_row(entry, len)?;

            let times = row
                .iter()
                .map(|secs| secs.to_string())
                .collect::<Vec<_>>()
                .join(",");
            writeln!(writer, "{},{len},{times}", entry.name)?;
            writer.flush()?;

            println!("range of size {len} done for {}", entry.name);
        }
    }

    Ok(())
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("perf-report: {err}");
            eprintln!("Usage: perf-report [output.csv] [max_len] [step]");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("perf-report: {err}");
        std::process::exit(1);
    }
}
