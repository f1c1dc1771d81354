//! Exact factorials.
//!
//! Three interchangeable variants: recursive, iterative, and a product over
//! `1..=n`. All of them reject negative input with the same error.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{non_negative, NumError};

const OPERATION: &str = "factorial";

/// Ranges shorter than this are multiplied out directly.
const SPLIT_THRESHOLD: u64 = 16;

/// Compute `n!` by recursive binary splitting of the product `1..=n`.
///
/// Each call halves its range, so recursion depth is logarithmic in `n`.
///
/// # Example
/// ```
/// use numseq_core::factorial::recursive_factorial;
/// assert_eq!(recursive_factorial(5).unwrap().to_string(), "120");
/// assert!(recursive_factorial(-1).is_err());
/// ```
pub fn recursive_factorial(n: i64) -> Result<BigUint, NumError> {
    fn product(lo: u64, hi: u64) -> BigUint {
        if hi < lo {
            return BigUint::one();
        }
        if hi - lo < SPLIT_THRESHOLD {
            return (lo..=hi).map(BigUint::from).product();
        }
        let mid = lo + (hi - lo) / 2;
        product(lo, mid) * product(mid + 1, hi)
    }

    non_negative(OPERATION, n).map(|n| product(1, n))
}

/// Compute `n!` with an explicit accumulator loop.
pub fn iterative_factorial(n: i64) -> Result<BigUint, NumError> {
    let n = non_negative(OPERATION, n)?;
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }
    Ok(acc)
}

/// Compute `n!` as the product of `1..=n`.
pub fn product_factorial(n: i64) -> Result<BigUint, NumError> {
    let n = non_negative(OPERATION, n)?;
    Ok((1..=n).map(BigUint::from).product())
}
