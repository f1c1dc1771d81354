//! Sequence factory: look up a named sequence.

use std::fmt;

use num_bigint::BigUint;
use num_rational::Ratio;
use tracing::debug;

use crate::constants::DEFAULT_COPRIME_LIMIT;
use crate::coprime::coprime_pairs;
use crate::error::NumError;
use crate::incremental::PrimeGenerator;
use crate::iterator::FibIterator;
use crate::polygonal::{hexagonal_numbers, pentagonal_numbers, triangular_numbers};
use crate::rationals::Rationals;

/// A single term of a named sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An integer term.
    Integer(BigUint),
    /// A rational term, always in lowest terms.
    Rational(Ratio<BigUint>),
    /// A pair of integers.
    Pair(u64, u64),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Rational(value) => write!(f, "{}/{}", value.numer(), value.denom()),
            Self::Pair(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

impl From<(u64, u64)> for Term {
    fn from((a, b): (u64, u64)) -> Self {
        Self::Pair(a, b)
    }
}

/// Boxed lazy sequence of terms.
pub type TermSequence = Box<dyn Iterator<Item = Term> + Send>;

/// Factory trait for creating named sequences.
pub trait SequenceFactory: Send + Sync {
    /// Create a fresh sequence by name.
    fn create(&self, name: &str) -> Result<TermSequence, NumError>;

    /// List all available sequence names.
    fn available(&self) -> Vec<&str>;
}

/// Factory over the built-in sequences. All are unbounded except `coprimes`,
/// which stops at [`DEFAULT_COPRIME_LIMIT`].
#[derive(Debug, Default)]
pub struct DefaultFactory;

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SequenceFactory for DefaultFactory {
    fn create(&self, name: &str) -> Result<TermSequence, NumError> {
        let seq: TermSequence = match name {
            "fibonacci" | "fib" => Box::new(FibIterator::new().map(Term::Integer)),
            "primes" => Box::new(PrimeGenerator::new().map(|p| Term::Integer(p.into()))),
            "triangular" => Box::new(triangular_numbers().map(Term::Integer)),
            "pentagonal" => Box::new(pentagonal_numbers().map(Term::Integer)),
            "hexagonal" => Box::new(hexagonal_numbers().map(Term::Integer)),
            "rationals" => Box::new(Rationals::new().map(Term::Rational)),
            "coprimes" => Box::new(coprime_pairs(DEFAULT_COPRIME_LIMIT).map(Term::from)),
            _ => {
                return Err(NumError::invalid(
                    "sequence",
                    format!("unknown sequence: {name}"),
                ))
            }
        };
        debug!(sequence = name, "created sequence");
        Ok(seq)
    }

    fn available(&self) -> Vec<&str> {
        vec![
            "fibonacci",
            "primes",
            "triangular",
            "pentagonal",
            "hexagonal",
            "rationals",
            "coprimes",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str, count: usize) -> Vec<String> {
        DefaultFactory::new()
            .create(name)
            .unwrap()
            .take(count)
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn every_advertised_name_resolves() {
        let factory = DefaultFactory::new();
        for name in factory.available() {
            assert!(factory.create(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn fibonacci_alias() {
        assert_eq!(render("fib", 5), render("fibonacci", 5));
    }

    #[test]
    fn rendered_terms() {
        assert_eq!(render("primes", 5), ["2", "3", "5", "7", "11"]);
        assert_eq!(render("triangular", 4), ["0", "1", "3", "6"]);
        assert_eq!(render("rationals", 3), ["1/1", "1/2", "2/1"]);
    }

    #[test]
    fn unknown_name() {
        let err = DefaultFactory::new().create("nonexistent").err().unwrap();
        assert_eq!(
            err.to_string(),
            "invalid argument to sequence: unknown sequence: nonexistent"
        );
    }

    #[test]
    fn pair_display() {
        assert_eq!(Term::Pair(3, 2).to_string(), "(3, 2)");
        assert_eq!(Term::from((5, 3)), Term::Pair(5, 3));
    }

    #[test]
    fn coprimes_yield_pairs_below_default_ceiling() {
        let terms: Vec<Term> = DefaultFactory::new().create("coprimes").unwrap().collect();
        assert_eq!(terms[..3], [Term::Pair(1, 1), Term::Pair(2, 1), Term::Pair(3, 2)]);
        assert!(terms.iter().all(|t| matches!(t, Term::Pair(a, b)
            if *a <= DEFAULT_COPRIME_LIMIT && b <= a)));
        assert_eq!(render("coprimes", 2), ["(1, 1)", "(2, 1)"]);
    }
}
