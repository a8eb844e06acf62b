//! Calculator trait, error type, and the two calculator implementations.
//!
//! `Calculator` is the seam the interactive session drives. Both
//! implementations accept the caller's cache; only `MemoizedCalculator`
//! touches it.

use crate::cache::FibCache;
use crate::constants::MIN_FIB_INDEX;
use crate::memoized::memoized_fib;
use crate::naive::naive_fib;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The index is below the supported domain.
    #[error("n must be at least 1, got {0}")]
    InvalidArgument(i64),

    /// The result does not fit in a 64-bit signed integer.
    #[error("F({0}) overflows a 64-bit signed integer (largest supported index is 92)")]
    Overflow(i64),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Check that `n` is a valid Fibonacci index and convert it.
pub fn validate_index(n: i64) -> Result<u64, FibError> {
    u64::try_from(n)
        .ok()
        .filter(|&index| index >= MIN_FIB_INDEX)
        .ok_or(FibError::InvalidArgument(n))
}

/// A Fibonacci algorithm driven by the interactive session.
pub trait Calculator: Send + Sync {
    /// Calculate F(n), possibly reading from and filling `cache`.
    fn calculate(&self, n: i64, cache: &mut FibCache) -> Result<i64, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Exponential-time recursive calculator. Ignores the cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveCalculator;

impl NaiveCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for NaiveCalculator {
    fn calculate(&self, n: i64, _cache: &mut FibCache) -> Result<i64, FibError> {
        naive_fib(n)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Linear-time calculator backed by the caller's cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoizedCalculator;

impl MemoizedCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for MemoizedCalculator {
    fn calculate(&self, n: i64, cache: &mut FibCache) -> Result<i64, FibError> {
        memoized_fib(n, cache)
    }

    fn name(&self) -> &'static str {
        "Memoized"
    }
}
