//! Memoized fast doubling for Fibonacci numbers.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k-1) + F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! The even form is F(k) * (2*F(k+1) - F(k)) rewritten through
//! F(k+1) = F(k) + F(k-1), so every recursive call is on a strictly smaller
//! index. Each index is computed once per cache; O(log n) distinct indices
//! are visited.

use std::cell::RefCell;

use num_bigint::BigUint;

use crate::error::{non_negative, NumError};
use crate::memo::{FibMemo, MemoCache, MemoStats};

const OPERATION: &str = "fibonacci";

thread_local! {
    static FIB_MEMO: RefCell<FibMemo> = RefCell::new(FibMemo::new());
}

/// Compute F(n) using the calling thread's memo.
///
/// The memo lives as long as the thread and is never evicted, so repeated
/// and overlapping calls are answered from it.
///
/// # Example
/// ```
/// assert_eq!(numseq_core::fibonacci(10).unwrap().to_string(), "55");
/// assert!(numseq_core::fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<BigUint, NumError> {
    let n = non_negative(OPERATION, n)?;
    Ok(FIB_MEMO.with(|memo| doubling(n, &mut *memo.borrow_mut())))
}

/// Compute F(n) using a caller-supplied cache.
pub fn fibonacci_with<C: MemoCache>(n: i64, cache: &mut C) -> Result<BigUint, NumError> {
    let n = non_negative(OPERATION, n)?;
    Ok(doubling(n, cache))
}

/// Statistics of the calling thread's memo.
#[must_use]
pub fn thread_memo_stats() -> MemoStats {
    FIB_MEMO.with(|memo| memo.borrow().stats())
}

pub(crate) fn doubling<C: MemoCache>(n: u64, cache: &mut C) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }

    cache.get_or_compute(n, |cache| {
        let k = n / 2;
        let fk = doubling(k, cache);
        if n % 2 == 1 {
            let fk1 = doubling(k + 1, cache);
            &fk * &fk + &fk1 * &fk1
        } else {
            let fk_prev = doubling(k - 1, cache);
            ((fk_prev << 1u32) + &fk) * &fk
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci(0).unwrap(), BigUint::from(0u32));
        assert_eq!(fibonacci(1).unwrap(), BigUint::from(1u32));
        assert_eq!(fibonacci(2).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn fast_doubling_small_values() {
        let expected: [u64; 21] = [
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
            6765,
        ];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(
                fibonacci(n as i64).unwrap(),
                BigUint::from(*value),
                "F({n})"
            );
        }
    }

    #[test]
    fn fast_doubling_known_values() {
        assert_eq!(
            fibonacci(94).unwrap(),
            BigUint::parse_bytes(b"19740274219868223167", 10).unwrap()
        );
        assert_eq!(
            fibonacci(100).unwrap(),
            BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
        );
        assert_eq!(
            fibonacci(200).unwrap(),
            BigUint::parse_bytes(b"280571172992510140037611932413038677189525", 10).unwrap()
        );
    }

    #[test]
    fn fast_doubling_f1000() {
        let s = fibonacci(1000).unwrap().to_string();
        assert!(s.starts_with("43466557686937456435688527675040625802564"));
        assert_eq!(s.len(), 209);
    }

    #[test]
    fn negative_index_rejected() {
        let err = fibonacci(-3).unwrap_err();
        assert!(matches!(
            err,
            NumError::InvalidArgument {
                operation: "fibonacci",
                ..
            }
        ));
        let mut cache = FibMemo::new();
        assert_eq!(fibonacci_with(-3, &mut cache).unwrap_err(), err);
        assert!(cache.is_empty());
    }

    #[test]
    fn injected_cache_is_reused() {
        let mut cache = FibMemo::new();
        let first = fibonacci_with(500, &mut cache).unwrap();
        let after_first = cache.stats();
        let second = fibonacci_with(500, &mut cache).unwrap();
        let after_second = cache.stats();

        assert_eq!(first, second);
        assert_eq!(after_second.misses, after_first.misses);
        assert_eq!(after_second.hits, after_first.hits + 1);
    }

    #[test]
    fn visits_logarithmically_many_indices() {
        let mut cache: HashMap<u64, BigUint> = HashMap::new();
        fibonacci_with(1 << 20, &mut cache).unwrap();
        // Every level contributes at most three indices.
        assert!(cache.len() <= 3 * 21, "{} entries", cache.len());
    }

    #[test]
    fn thread_memo_accumulates() {
        fibonacci(321).unwrap();
        let before = thread_memo_stats();
        fibonacci(321).unwrap();
        let after = thread_memo_stats();
        assert!(after.hits > before.hits);
        assert_eq!(after.entries, before.entries);
    }
}
