//! Plain recursive Fibonacci.
//!
//! Time O(phi^n), space O(n) stack. Only practical up to n of roughly 40.

use crate::calculator::{validate_index, FibError};
use crate::constants::MAX_FIB_INDEX;

/// Compute F(n) by the textbook recurrence, without memoization.
///
/// Returns 1 for n = 1 and n = 2.
///
/// # Example
/// ```
/// assert_eq!(fibmemo_core::naive::naive_fib(10), Ok(55));
/// ```
pub fn naive_fib(n: i64) -> Result<i64, FibError> {
    let index = validate_index(n)?;
    if index > MAX_FIB_INDEX {
        return Err(FibError::Overflow(n));
    }
    tracing::trace!(n, "naive recursion");
    recurse(index).ok_or(FibError::Overflow(n))
}

fn recurse(n: u64) -> Option<i64> {
    if n <= 2 {
        return Some(1);
    }
    recurse(n - 1)?.checked_add(recurse(n - 2)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn base_cases() {
        assert_eq!(naive_fib(1), Ok(1));
        assert_eq!(naive_fib(2), Ok(1));
    }

    #[test]
    fn small_values_match_table() {
        for n in 1..=30 {
            assert_eq!(naive_fib(n), Ok(FIB_TABLE[n as usize]), "F({n})");
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(naive_fib(6), Ok(8));
        assert_eq!(naive_fib(7), Ok(13));
        assert_eq!(naive_fib(8), Ok(21));
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(naive_fib(0), Err(FibError::InvalidArgument(0)));
        assert_eq!(naive_fib(-1), Err(FibError::InvalidArgument(-1)));
    }

    #[test]
    fn rejects_overflowing_index_without_recursing() {
        assert_eq!(naive_fib(93), Err(FibError::Overflow(93)));
        assert_eq!(naive_fib(i64::MAX), Err(FibError::Overflow(i64::MAX)));
    }
}
