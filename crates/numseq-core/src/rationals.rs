//! Enumeration of the positive rationals in Calkin–Wilf order.

use num_bigint::BigUint;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::error::NumError;

/// Lazy, unbounded iterator over every positive rational exactly once.
///
/// The successor of `p/q` is `q / (q * floor(p/q) + q - (p mod q))`, which
/// stays in lowest terms, so no gcd is ever taken. The seed itself is not
/// yielded: from the default seed 0/1 the first term is 1/1.
///
/// # Example
/// ```
/// use numseq_core::rationals::Rationals;
/// let first: Vec<String> = Rationals::new().take(4).map(|r| r.to_string()).collect();
/// assert_eq!(first, ["1", "1/2", "2", "1/3"]);
/// ```
#[derive(Debug, Clone)]
pub struct Rationals {
    current: Ratio<BigUint>,
}

impl Rationals {
    /// Enumerate from the seed 0/1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Ratio::new_raw(BigUint::zero(), BigUint::one()),
        }
    }

    /// Enumerate the successors of `numer/denom`, reduced first.
    pub fn starting_at(numer: BigUint, denom: BigUint) -> Result<Self, NumError> {
        if denom.is_zero() {
            return Err(NumError::invalid("rationals", "denominator is zero"));
        }
        Ok(Self {
            current: Ratio::new(numer, denom),
        })
    }

    /// The most recently produced value (the seed before the first pull).
    #[must_use]
    pub fn current(&self) -> &Ratio<BigUint> {
        &self.current
    }
}

impl Default for Rationals {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Rationals {
    type Item = Ratio<BigUint>;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.current.numer();
        let q = self.current.denom();
        let (whole, rem) = p.div_rem(q);
        let denom = q * whole + q - rem;
        self.current = Ratio::new_raw(q.clone(), denom);
        Some(self.current.clone())
    }
}
