//! # fibmemo-core
//!
//! Core library for FibMemo. Provides a naive recursive Fibonacci and a
//! memoized one backed by an explicitly owned [`FibCache`].

pub mod cache;
pub mod calculator;
pub mod constants;
pub mod memoized;
pub mod naive;
pub mod registry;

// Re-exports
pub use cache::{CacheStats, FibCache};
pub use calculator::{Calculator, FibError, MemoizedCalculator, NaiveCalculator};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_INDEX, MIN_FIB_INDEX};
pub use memoized::memoized_fib;
pub use naive::naive_fib;
pub use registry::calculator_for;

/// Compute F(n) with a throwaway cache.
///
/// For repeated queries keep a [`FibCache`] and call [`memoized_fib`]
/// directly so work is shared between calls.
///
/// # Example
/// ```
/// assert_eq!(fibmemo_core::fibonacci(10), Ok(55));
/// assert!(fibmemo_core::fibonacci(0).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<i64, FibError> {
    memoized_fib(n, &mut FibCache::new())
}
