//! # numseq-core
//!
//! Exact number-theoretic primitives and lazy sequence generators:
//! factorials, Euclidean and extended gcd, memoized fast-doubling Fibonacci,
//! three prime sieves, polygonal numbers, Calkin–Wilf rationals and the
//! coprime-pair tree.

pub mod constants;
pub mod coprime;
pub mod error;
pub mod factorial;
pub mod fastdoubling;
pub mod gcd;
pub mod incremental;
pub mod iterator;
pub mod memo;
pub mod polygonal;
pub mod primes;
pub mod rationals;
pub mod registry;
pub mod sieve;

// Re-exports
pub use constants::{exit_codes, DEFAULT_COPRIME_LIMIT, DEFAULT_TAKE};
pub use coprime::{coprime_pairs, CoprimePairs};
pub use error::NumError;
pub use factorial::{iterative_factorial, product_factorial, recursive_factorial};
pub use fastdoubling::{fibonacci, fibonacci_with};
pub use gcd::{iterative_gcd, iterative_xgcd, recursive_gcd, recursive_xgcd, Bezout};
pub use incremental::PrimeGenerator;
pub use iterator::FibIterator;
pub use memo::{FibMemo, MemoCache, MemoStats};
pub use polygonal::{polygonal_number, polygonal_numbers, PolygonalNumbers};
pub use primes::{primes, PrimeBounds, Primes};
pub use rationals::Rationals;
pub use registry::{DefaultFactory, SequenceFactory, Term};
pub use sieve::{primes_between, primes_until};

/// Sequence of every positive rational, starting at 1/1.
///
/// # Example
/// ```
/// let third = numseq_core::rationals().nth(2).unwrap();
/// assert_eq!(third.to_string(), "2");
/// ```
#[must_use]
pub fn rationals() -> Rationals {
    Rationals::new()
}
