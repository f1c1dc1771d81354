//! Lazy Fibonacci iterator using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::fastdoubling::doubling;
use crate::memo::FibMemo;

/// Lazy, unbounded iterator over the Fibonacci sequence starting at F(0).
///
/// # Example
/// ```
/// use numseq_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibIterator {
    a: BigUint,
    b: BigUint,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
        }
    }

    /// Start iteration at F(n), jumping there with fast doubling.
    ///
    /// F(n + 1) is derived as F(n) + F(n - 1), so no index above `n` is
    /// formed and every `u64` index is accepted.
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        let Some(prev_index) = n.checked_sub(1) else {
            return Self::new();
        };
        let mut memo = FibMemo::new();
        let a = doubling(n, &mut memo);
        let b = &a + doubling(prev_index, &mut memo);
        Self { a, b }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.a + &self.b;
        let b = std::mem::replace(&mut self.b, next);
        Some(std::mem::replace(&mut self.a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten() {
        let vals: Vec<u64> = FibIterator::new()
            .take(10)
            .map(|v| v.try_into().unwrap())
            .collect();
        assert_eq!(vals, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn from_index_skips() {
        let mut iter = FibIterator::from_index(10);
        assert_eq!(iter.next().unwrap(), BigUint::from(55u32));
        assert_eq!(iter.next().unwrap(), BigUint::from(89u32));
    }

    #[test]
    fn from_index_matches_stepping() {
        let stepped: Vec<BigUint> = FibIterator::new().skip(137).take(5).collect();
        let jumped: Vec<BigUint> = FibIterator::from_index(137).take(5).collect();
        assert_eq!(stepped, jumped);
    }

    #[test]
    fn agrees_with_fast_doubling() {
        for (n, value) in FibIterator::new().take(100).enumerate() {
            assert_eq!(crate::fibonacci(n as i64).unwrap(), value, "F({n})");
        }
    }

    #[test]
    fn from_index_low_indices() {
        let heads: Vec<BigUint> = (0..4)
            .map(|n| FibIterator::from_index(n).next().unwrap())
            .collect();
        assert_eq!(heads, [0u32, 1, 1, 2].map(BigUint::from));
        let pair: Vec<BigUint> = FibIterator::from_index(1).take(3).collect();
        assert_eq!(pair, [1u32, 1, 2].map(BigUint::from));
    }

    #[test]
    fn from_index_successor_without_next_index() {
        let mut memo = FibMemo::new();
        let mut iter = FibIterator::from_index(500);
        iter.next();
        assert_eq!(iter.next().unwrap(), doubling(501, &mut memo));
    }
}
