#![no_main]

use libfuzzer_sys::fuzz_target;

use numseq_core::{primes_between, primes_until, PrimeGenerator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Window bounds from the first 4 bytes, kept small for speed
    let low = u64::from(u16::from_le_bytes([data[0], data[1]])) % 20_000;
    let width = u64::from(u16::from_le_bytes([data[2], data[3]])) % 5_000;
    let high = low + width;

    let bounded = primes_until(high);
    let window = primes_between(low, high);
    let expected: Vec<u64> = bounded.iter().copied().filter(|&p| p >= low).collect();
    assert_eq!(window, expected, "segmented != bounded on [{low}, {high}]");

    let generated: Vec<u64> = PrimeGenerator::new().take_while(|&p| p <= high).collect();
    assert_eq!(generated, bounded, "incremental != bounded up to {high}");
});
