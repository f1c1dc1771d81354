//! Memoization cache for index-keyed big-integer results.
//!
//! The cache is an explicit value owned by the caller: unbounded, append-only,
//! never evicted for as long as it lives. It performs no synchronization; a
//! cache shared between threads must be guarded by the caller.

use std::collections::HashMap;

use num_bigint::BigUint;
use tracing::trace;

/// Keyed store with get-or-compute semantics.
pub trait MemoCache {
    /// Return the cached value for `key`, if any.
    fn lookup(&mut self, key: u64) -> Option<BigUint>;

    /// Record the value for `key`.
    fn store(&mut self, key: u64, value: BigUint);

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` receives the cache so recursive computations can reuse it.
    fn get_or_compute<F>(&mut self, key: u64, compute: F) -> BigUint
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> BigUint,
    {
        if let Some(value) = self.lookup(key) {
            return value;
        }
        let value = compute(self);
        self.store(key, value.clone());
        value
    }
}

impl MemoCache for HashMap<u64, BigUint> {
    fn lookup(&mut self, key: u64) -> Option<BigUint> {
        self.get(&key).cloned()
    }

    fn store(&mut self, key: u64, value: BigUint) {
        self.insert(key, value);
    }
}

/// Snapshot of memo statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that required computation.
    pub misses: u64,
    /// Number of stored entries.
    pub entries: usize,
}

impl MemoStats {
    /// Fraction of lookups answered from the cache.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Unbounded memo for Fibonacci values that counts hits and misses.
#[derive(Debug, Default)]
pub struct FibMemo {
    values: HashMap<u64, BigUint>,
    hits: u64,
    misses: u64,
}

impl FibMemo {
    /// Create an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no value has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.values.len(),
        }
    }
}

impl MemoCache for FibMemo {
    fn lookup(&mut self, key: u64) -> Option<BigUint> {
        if let Some(value) = self.values.get(&key) {
            self.hits += 1;
            Some(value.clone())
        } else {
            self.misses += 1;
            trace!(key, "memo miss");
            None
        }
    }

    fn store(&mut self, key: u64, value: BigUint) {
        self.values.insert(key, value);
    }
}
