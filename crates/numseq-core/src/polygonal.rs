//! Polygonal numbers: closed form and lazy sequence.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::constants::{HEXAGONAL_SIDES, MIN_POLYGON_SIDES, PENTAGONAL_SIDES, TRIANGULAR_SIDES};
use crate::error::{non_negative, NumError};

fn check_sides(operation: &'static str, r: i64) -> Result<u64, NumError> {
    if r < MIN_POLYGON_SIDES {
        return Err(NumError::invalid(
            operation,
            format!("polygons need at least {MIN_POLYGON_SIDES} sides, got {r}"),
        ));
    }
    non_negative(operation, r)
}

/// The `n`-th `r`-gonal number, `n * ((n - 1) * r - 2 * (n - 2)) / 2`.
///
/// # Example
/// ```
/// use numseq_core::polygonal::polygonal_number;
/// assert_eq!(polygonal_number(4, 3).unwrap().to_string(), "10");
/// assert!(polygonal_number(4, 2).is_err());
/// ```
pub fn polygonal_number(n: i64, r: i64) -> Result<BigUint, NumError> {
    const OPERATION: &str = "polygonal_number";
    let r = check_sides(OPERATION, r)?;
    let n = non_negative(OPERATION, n)?;

    let n = BigInt::from(n);
    let r = BigInt::from(r);
    let value: BigInt = &n * ((&n - 1) * &r - (&n - 2) * 2) / 2;
    // non-negative for n >= 0 and r >= 3
    let (_, magnitude) = value.into_parts();
    Ok(magnitude)
}

/// The `n`-th triangular number.
pub fn triangular_number(n: i64) -> Result<BigUint, NumError> {
    polygonal_number(n, TRIANGULAR_SIDES as i64)
}

/// The `n`-th pentagonal number.
pub fn pentagonal_number(n: i64) -> Result<BigUint, NumError> {
    polygonal_number(n, PENTAGONAL_SIDES as i64)
}

/// The `n`-th hexagonal number.
pub fn hexagonal_number(n: i64) -> Result<BigUint, NumError> {
    polygonal_number(n, HEXAGONAL_SIDES as i64)
}

/// Lazy, unbounded sequence of `r`-gonal numbers from index 0.
///
/// Step `k` adds `k * (r - 2) + 1` to the running term.
#[derive(Debug, Clone)]
pub struct PolygonalNumbers {
    sides: u64,
    term: BigUint,
    k: u64,
}

impl PolygonalNumbers {
    fn with_sides(sides: u64) -> Self {
        Self {
            sides,
            term: BigUint::zero(),
            k: 0,
        }
    }

    /// Number of sides of the polygon.
    #[must_use]
    pub fn sides(&self) -> u64 {
        self.sides
    }
}

impl Iterator for PolygonalNumbers {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let increment = BigUint::from(self.k) * (self.sides - 2) + BigUint::one();
        let next = &self.term + increment;
        self.k += 1;
        Some(std::mem::replace(&mut self.term, next))
    }
}

/// Sequence of all `r`-gonal numbers.
pub fn polygonal_numbers(r: i64) -> Result<PolygonalNumbers, NumError> {
    check_sides("polygonal_numbers", r).map(PolygonalNumbers::with_sides)
}

/// Sequence of triangular numbers.
#[must_use]
pub fn triangular_numbers() -> PolygonalNumbers {
    PolygonalNumbers::with_sides(TRIANGULAR_SIDES)
}

/// Sequence of pentagonal numbers.
#[must_use]
pub fn pentagonal_numbers() -> PolygonalNumbers {
    PolygonalNumbers::with_sides(PENTAGONAL_SIDES)
}

/// Sequence of hexagonal numbers.
#[must_use]
pub fn hexagonal_numbers() -> PolygonalNumbers {
    PolygonalNumbers::with_sides(HEXAGONAL_SIDES)
}
