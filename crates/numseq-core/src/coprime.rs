//! Depth-first enumeration of the coprime-pair tree.

use crate::error::NumError;

/// Iterator over the ternary coprime tree below a ceiling `n`.
///
/// Node `(a, b)` has children `(a*k + b, a)` for `k = 1, 2, ...` while
/// `a*k + b <= n`. Nodes come out in pre-order, children in increasing `k`.
/// From the root `(1, 1)` this yields `(1, 1)` and every coprime `(a, b)`
/// with `b < a <= n`, each exactly once.
///
/// The explicit stack holds one frame per tree level, and `a` at least
/// doubles every two levels, so its depth is logarithmic in `n`.
///
/// # Example
/// ```
/// use numseq_core::coprime::coprime_pairs;
/// let pairs: Vec<(u64, u64)> = coprime_pairs(4).collect();
/// assert_eq!(pairs, [(1, 1), (2, 1), (3, 2), (3, 1), (4, 3), (4, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct CoprimePairs {
    limit: u64,
    root: Option<(u64, u64)>,
    /// `(a, b, next k)` for every node on the current path.
    stack: Vec<(u64, u64, u64)>,
}

impl CoprimePairs {
    /// Enumerate the subtree rooted at `(a, b)`.
    pub fn from_root(limit: u64, a: u64, b: u64) -> Result<Self, NumError> {
        if a == 0 || b == 0 {
            return Err(NumError::invalid(
                "coprime_pairs",
                format!("root ({a}, {b}) must have positive components"),
            ));
        }
        Ok(Self {
            limit,
            root: Some((a, b)),
            stack: Vec::new(),
        })
    }

    /// Current depth of the traversal.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for CoprimePairs {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((a, b)) = self.root.take() {
            self.stack.push((a, b, 1));
            return Some((a, b));
        }

        loop {
            let frame = self.stack.last_mut()?;
            let (a, b, k) = *frame;
            match a.checked_mul(k).and_then(|ak| ak.checked_add(b)) {
                Some(child) if child <= self.limit => {
                    frame.2 += 1;
                    self.stack.push((child, a, 1));
                    return Some((child, a));
                }
                _ => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Coprime pairs generated from the root `(1, 1)` below the ceiling `n`.
#[must_use]
pub fn coprime_pairs(n: u64) -> CoprimePairs {
    CoprimePairs {
        limit: n,
        root: Some((1, 1)),
        stack: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use num_integer::Integer;

    use super::*;

    /// `(1, 1)` plus every coprime `(a, b)` with `b < a <= n`.
    fn brute_force(n: u64) -> HashSet<(u64, u64)> {
        let mut pairs: HashSet<(u64, u64)> = (2..=n)
            .flat_map(|a| (1..a).map(move |b| (a, b)))
            .filter(|&(a, b)| a.gcd(&b) == 1)
            .collect();
        pairs.insert((1, 1));
        pairs
    }

    #[test]
    fn ceiling_ten() {
        let pairs: Vec<(u64, u64)> = coprime_pairs(10).collect();
        let unique: HashSet<(u64, u64)> = pairs.iter().copied().collect();
        assert_eq!(pairs.len(), unique.len());
        assert_eq!(pairs.len(), 32);
        assert_eq!(unique, brute_force(10));
    }

    #[test]
    fn all_pairs_coprime_and_positive() {
        for (a, b) in coprime_pairs(60) {
            assert!(a >= 1 && b >= 1);
            assert_eq!(a.gcd(&b), 1, "({a}, {b})");
        }
    }

    #[test]
    fn matches_brute_force_counts() {
        for n in [1, 2, 3, 7, 25, 100] {
            assert_eq!(coprime_pairs(n).count(), brute_force(n).len(), "n={n}");
        }
    }

    #[test]
    fn depth_first_order() {
        let pairs: Vec<(u64, u64)> = coprime_pairs(5).collect();
        assert_eq!(
            pairs,
            [
                (1, 1),
                (2, 1),
                (3, 2),
                (5, 3),
                (5, 2),
                (3, 1),
                (4, 3),
                (4, 1),
                (5, 4),
                (5, 1),
            ]
        );
    }

    #[test]
    fn small_ceilings_yield_root_only() {
        assert_eq!(coprime_pairs(0).collect::<Vec<_>>(), [(1, 1)]);
        assert_eq!(coprime_pairs(1).collect::<Vec<_>>(), [(1, 1)]);
    }

    #[test]
    fn subtree_from_custom_root() {
        let pairs: Vec<(u64, u64)> = CoprimePairs::from_root(12, 3, 2).unwrap().collect();
        assert_eq!(pairs[0], (3, 2));
        assert!(pairs.contains(&(5, 3)));
        assert!(pairs.contains(&(8, 3)));
        assert!(pairs.contains(&(11, 3)));
        assert!(!pairs.contains(&(3, 1)));
    }

    #[test]
    fn zero_root_rejected() {
        assert!(CoprimePairs::from_root(10, 0, 1).is_err());
        assert!(CoprimePairs::from_root(10, 1, 0).is_err());
    }

    #[test]
    fn stack_depth_stays_logarithmic() {
        let mut iter = coprime_pairs(10_000);
        let mut max_depth = 0;
        while iter.next().is_some() {
            max_depth = max_depth.max(iter.depth());
        }
        assert!(max_depth < 64, "depth {max_depth}");
    }
}
