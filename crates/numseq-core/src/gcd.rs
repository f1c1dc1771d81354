//! Euclidean greatest common divisor and its extended (Bézout) form.
//!
//! Both come in a recursive and an iterative flavour. Inputs are
//! non-negative by type, so every function here is total; `gcd(0, 0)` is 0.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Bézout triple: `x * m + y * n == gcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bezout {
    /// Coefficient of the first argument.
    pub x: BigInt,
    /// Coefficient of the second argument.
    pub y: BigInt,
    /// The (non-negative) greatest common divisor.
    pub gcd: BigUint,
}

impl Bezout {
    /// Check the identity `x * m + y * n == gcd` for the given arguments.
    #[must_use]
    pub fn satisfies(&self, m: &BigUint, n: &BigUint) -> bool {
        let lhs = &self.x * BigInt::from(m.clone()) + &self.y * BigInt::from(n.clone());
        lhs == BigInt::from(self.gcd.clone())
    }
}

/// Greatest common divisor by recursion on `(n, m mod n)`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use numseq_core::gcd::recursive_gcd;
/// let g = recursive_gcd(&BigUint::from(42u32), &BigUint::from(91u32));
/// assert_eq!(g, BigUint::from(7u32));
/// ```
#[must_use]
pub fn recursive_gcd(m: &BigUint, n: &BigUint) -> BigUint {
    if n.is_zero() {
        m.clone()
    } else {
        recursive_gcd(n, &(m % n))
    }
}

/// Greatest common divisor by successive remainders in a loop.
#[must_use]
pub fn iterative_gcd(m: &BigUint, n: &BigUint) -> BigUint {
    let mut a = m.clone();
    let mut b = n.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

/// Extended Euclid, recursive form.
///
/// From `(x', y', g)` for `(n, m mod n)` the triple for `(m, n)` is
/// `(y', x' - (m / n) * y', g)`.
#[must_use]
pub fn recursive_xgcd(m: &BigUint, n: &BigUint) -> Bezout {
    if n.is_zero() {
        return Bezout {
            x: BigInt::one(),
            y: BigInt::zero(),
            gcd: m.clone(),
        };
    }

    let (q, r) = m.div_rem(n);
    let inner = recursive_xgcd(n, &r);
    let y = inner.x - BigInt::from(q) * &inner.y;
    Bezout {
        x: inner.y,
        y,
        gcd: inner.gcd,
    }
}

/// Extended Euclid, iterative form tracking both coefficient sequences.
#[must_use]
pub fn iterative_xgcd(m: &BigUint, n: &BigUint) -> Bezout {
    let mut old_r = m.clone();
    let mut r = n.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = std::mem::replace(&mut r, rem);

        let q = BigInt::from(q);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    Bezout {
        x: old_s,
        y: old_t,
        gcd: old_r,
    }
}
