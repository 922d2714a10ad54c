#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_algos::{stable, unstable};
use sort_algos_fuzz::u8_as_i32;

// Everything here is quadratic.
const MAX_LEN: usize = 2_048;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };

    let mut v = u8_as_i32(data);
    v.truncate(MAX_LEN);

    let mut expected = v.clone();
    expected.sort();

    match selector % 5 {
        0 => stable::bubble::sort(&mut v),
        1 => stable::selection::sort(&mut v),
        2 => stable::cocktail::sort(&mut v),
        3 => stable::insertion::sort(&mut v),
        _ => unstable::comb::sort(&mut v),
    }

    assert_eq!(v, expected);
});
