//! Unbounded incremental sieve.

use std::collections::HashMap;

/// Lazy iterator over every prime in ascending order, with no upper bound.
///
/// Keeps a map from each upcoming odd composite to the prime that will strike
/// it. A candidate missing from the map is prime and registers its square; a
/// registered candidate moves its prime on to the next odd multiple that no
/// other prime has claimed yet.
///
/// Multiples beyond `u64::MAX` are never registered, so the sequence is exact
/// over the whole `u64` range.
///
/// # Example
/// ```
/// use numseq_core::incremental::PrimeGenerator;
/// let first: Vec<u64> = PrimeGenerator::new().take(6).collect();
/// assert_eq!(first, [2, 3, 5, 7, 11, 13]);
/// ```
#[derive(Debug)]
pub struct PrimeGenerator {
    composites: HashMap<u64, u64>,
    candidate: Option<u64>,
    yielded_two: bool,
}

impl PrimeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            composites: HashMap::new(),
            candidate: Some(3),
            yielded_two: false,
        }
    }

    /// Number of composites currently registered.
    #[must_use]
    pub fn pending_composites(&self) -> usize {
        self.composites.len()
    }

    fn register_next_multiple(&mut self, composite: u64, prime: u64) {
        let Some(step) = prime.checked_mul(2) else {
            return;
        };
        let mut next = composite.checked_add(step);
        while let Some(target) = next {
            if !self.composites.contains_key(&target) {
                self.composites.insert(target, prime);
                return;
            }
            next = target.checked_add(step);
        }
    }
}

impl Default for PrimeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.yielded_two {
            self.yielded_two = true;
            return Some(2);
        }

        loop {
            let q = self.candidate?;
            self.candidate = q.checked_add(2);

            match self.composites.remove(&q) {
                None => {
                    if let Some(square) = q.checked_mul(q) {
                        self.composites.insert(square, q);
                    }
                    return Some(q);
                }
                Some(prime) => self.register_next_multiple(q, prime),
            }
        }
    }
}
