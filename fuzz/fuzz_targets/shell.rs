#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_algos::unstable::shell;
use sort_algos::GapStrategy;
use sort_algos_fuzz::u8_as_i32;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };

    let strategy = GapStrategy::ALL[selector as usize % GapStrategy::ALL.len()];

    let mut v = u8_as_i32(data);
    let original = v.clone();

    let mut expected = v.clone();
    expected.sort_unstable();

    match shell::sort_with_gaps(&mut v, strategy) {
        Ok(()) => assert_eq!(v, expected),
        Err(_) => assert_eq!(v, original),
    }
});
