#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_algos::stable::natural_merge as test_sort;
use sort_algos_fuzz::{u8_as_i32, with_index};

fuzz_target!(|data: &[u8]| {
    // Few distinct values so that equal keys are common.
    let v = with_index(u8_as_i32(data).into_iter().map(|val| val % 16).collect());

    let mut expected = v.clone();
    expected.sort_by(|a, b| a.0.cmp(&b.0));

    let mut v = v;
    test_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

    assert_eq!(v, expected);
});
