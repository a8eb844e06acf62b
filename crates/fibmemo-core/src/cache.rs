//! Session-owned memo table for the memoized calculator.
//!
//! The cache is filled bottom-up, so its keys always form the contiguous
//! range `3..=highest`. The base cases F(1) and F(2) are never stored. The
//! `Frontier` records the last two values of that range so a later call can
//! resume the fill without re-reading the map.

use std::collections::HashMap;

/// Hit/miss counters and entry count for a [`FibCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Highest filled index together with F(index - 1) and F(index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frontier {
    pub index: u64,
    pub previous: i64,
    pub current: i64,
}

impl Frontier {
    /// The base cases: F(1) = F(2) = 1.
    const BASE: Self = Self {
        index: 2,
        previous: 1,
        current: 1,
    };
}

/// Mapping from Fibonacci index to value, owned by one session.
#[derive(Debug, Clone)]
pub struct FibCache {
    entries: HashMap<u64, i64>,
    frontier: Frontier,
    hits: u64,
    misses: u64,
}

impl FibCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            frontier: Frontier::BASE,
            hits: 0,
            misses: 0,
        }
    }

    /// Read a cached value without touching the counters.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<i64> {
        self.entries.get(&n).copied()
    }

    /// Read a cached value, recording a hit or a miss.
    pub(crate) fn lookup(&mut self, n: u64) -> Option<i64> {
        let value = self.get(n);
        if value.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        value
    }

    /// Store F(n). Storing the successor of the frontier advances it.
    pub(crate) fn insert(&mut self, n: u64, value: i64) {
        if n == self.frontier.index + 1 {
            self.frontier = Frontier {
                index: n,
                previous: self.frontier.current,
                current: value,
            };
        }
        self.entries.insert(n, value);
    }

    pub(crate) fn frontier(&self) -> Frontier {
        self.frontier
    }

    /// Highest cached index, or `None` when nothing has been computed yet.
    #[must_use]
    pub fn highest(&self) -> Option<u64> {
        (!self.entries.is_empty()).then_some(self.frontier.index)
    }

    #[must_use]
    pub fn contains(&self, n: u64) -> bool {
        self.entries.contains_key(&n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

impl Default for FibCache {
    fn default() -> Self {
        Self::new()
    }
}
