#![no_main]

use libfuzzer_sys::fuzz_target;

use numseq_core::{fibonacci_with, FibIterator, FibMemo};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as n
    let n = u16::from_le_bytes([data[0], data[1]]);

    let mut memo = FibMemo::new();
    let doubled = fibonacci_with(i64::from(n), &mut memo).unwrap();
    let stepped = FibIterator::from_index(u64::from(n).saturating_sub(1))
        .nth(usize::from(n.min(1)))
        .unwrap();
    assert_eq!(doubled, stepped, "fast doubling != iterator at n={n}");
});
