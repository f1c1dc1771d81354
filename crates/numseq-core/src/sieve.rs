//! Array sieves of Eratosthenes: bounded (odd-only) and segmented.

use num_integer::Roots;
use tracing::debug;

/// All primes `p <= n`, ascending.
///
/// Sieves only odd candidates: index `i` stands for `2*i + 3`, and each
/// surviving prime `p` crosses off `p*p, p*p + 2p, ...`.
///
/// # Example
/// ```
/// use numseq_core::sieve::primes_until;
/// assert_eq!(primes_until(10), [2, 3, 5, 7]);
/// assert!(primes_until(1).is_empty());
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn primes_until(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }

    let len = ((n - 1) / 2) as usize;
    let mut is_prime = vec![true; len];

    let mut i = 0usize;
    loop {
        let p = 2 * i as u64 + 3;
        if p.checked_mul(p).map_or(true, |square| square > n) {
            break;
        }
        if is_prime[i] {
            let step = p as usize;
            let mut j = ((p * p - 3) / 2) as usize;
            while j < len {
                is_prime[j] = false;
                j += step;
            }
        }
        i += 1;
    }

    let mut primes = Vec::with_capacity(len / 2 + 1);
    primes.push(2);
    primes.extend(
        is_prime
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| flag)
            .map(|(i, _)| 2 * i as u64 + 3),
    );

    debug!(limit = n, count = primes.len(), "bounded sieve complete");
    primes
}

/// All primes in the closed window `[m, n]`, ascending.
///
/// Even values other than 2 are struck up front; each odd base prime up to
/// `isqrt(n)` then strikes its multiples from `max(p*p, first multiple >= m)`.
/// 0 and 1 are composite and 2 is prime regardless of the generic marking.
///
/// # Example
/// ```
/// use numseq_core::sieve::primes_between;
/// assert_eq!(primes_between(10, 30), [11, 13, 17, 19, 23, 29]);
/// assert_eq!(primes_between(0, 5), [2, 3, 5]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn primes_between(m: u64, n: u64) -> Vec<u64> {
    if m > n || n < 2 {
        return Vec::new();
    }

    let len = (n - m) as usize + 1;
    let mut window = vec![true; len];

    // first even value in the window
    let mut j = (m % 2) as usize;
    while j < len {
        window[j] = false;
        j += 2;
    }

    let root = n.sqrt();
    let mut p = 3u64;
    while p <= root {
        let known_composite = p >= m && !window[(p - m) as usize];
        if !known_composite {
            if let Some(start) = first_strike(p, m) {
                let step = p as usize;
                let mut j = (start - m) as usize;
                while j < len {
                    window[j] = false;
                    j += step;
                }
            }
        }
        p += 2;
    }

    if m <= 1 {
        window[(1 - m) as usize] = false;
    }
    if m <= 2 {
        window[(2 - m) as usize] = true;
    }

    let primes: Vec<u64> = window
        .iter()
        .enumerate()
        .filter(|&(_, &flag)| flag)
        .map(|(i, _)| m + i as u64)
        .collect();

    debug!(
        low = m,
        high = n,
        count = primes.len(),
        "segmented sieve complete"
    );
    primes
}

/// First multiple of `p` to strike inside a window starting at `m`.
fn first_strike(p: u64, m: u64) -> Option<u64> {
    let square = p * p;
    if square >= m {
        return Some(square);
    }
    m.div_ceil(p).checked_mul(p)
}
