//! Single entry point over the three prime enumeration strategies.

use std::vec;

use crate::incremental::PrimeGenerator;
use crate::sieve::{primes_between, primes_until};

/// Which prime algorithm a pair of optional bounds selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeBounds {
    /// No bound: the unbounded incremental generator.
    Unbounded,
    /// Upper bound only (inclusive): the odd-only sieve.
    Until(u64),
    /// Closed window `[low, high]`: the segmented sieve.
    Between(u64, u64),
}

impl PrimeBounds {
    /// Resolve optional bounds. A lone bound, in either position, is an upper
    /// bound.
    #[must_use]
    pub fn from_options(start: Option<u64>, stop: Option<u64>) -> Self {
        match (start, stop) {
            (None, None) => Self::Unbounded,
            (Some(limit), None) | (None, Some(limit)) => Self::Until(limit),
            (Some(low), Some(high)) => Self::Between(low, high),
        }
    }

    /// Run the selected algorithm.
    #[must_use]
    pub fn primes(self) -> Primes {
        match self {
            Self::Unbounded => Primes::Unbounded(PrimeGenerator::new()),
            Self::Until(limit) => Primes::Finite(primes_until(limit).into_iter()),
            Self::Between(low, high) => Primes::Finite(primes_between(low, high).into_iter()),
        }
    }
}

/// Primes produced by [`primes`]: either a finished sieve or the live
/// generator.
#[derive(Debug)]
pub enum Primes {
    /// Output of one of the array sieves.
    Finite(vec::IntoIter<u64>),
    /// The incremental sieve.
    Unbounded(PrimeGenerator),
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            Self::Finite(iter) => iter.next(),
            Self::Unbounded(gen) => gen.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Finite(iter) => iter.size_hint(),
            Self::Unbounded(_) => (usize::MAX, None),
        }
    }
}

/// Primes within optional bounds.
///
/// # Example
/// ```
/// use numseq_core::primes;
/// assert_eq!(primes(Some(10), None).collect::<Vec<_>>(), [2, 3, 5, 7]);
/// assert_eq!(primes(Some(10), Some(20)).collect::<Vec<_>>(), [11, 13, 17, 19]);
/// assert_eq!(primes(None, None).nth(99), Some(541));
/// ```
#[must_use]
pub fn primes(start: Option<u64>, stop: Option<u64>) -> Primes {
    PrimeBounds::from_options(start, stop).primes()
}
