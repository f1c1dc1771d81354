#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use numseq_core::{iterative_gcd, iterative_xgcd, recursive_gcd, recursive_xgcd};

fuzz_target!(|data: &[u8]| {
    // Split the input into two arbitrary-length operands
    let mid = data.len() / 2;
    let m = BigUint::from_bytes_le(&data[..mid]);
    let n = BigUint::from_bytes_le(&data[mid..]);

    let g = iterative_gcd(&m, &n);
    assert_eq!(recursive_gcd(&m, &n), g);

    for triple in [recursive_xgcd(&m, &n), iterative_xgcd(&m, &n)] {
        assert_eq!(triple.gcd, g);
        assert!(triple.satisfies(&m, &n), "Bézout identity fails for ({m}, {n})");
    }
});
