//! Memoized Fibonacci over a caller-owned [`FibCache`].
//!
//! The fill is iterative and resumes from the cache frontier, so every index
//! is computed at most once per cache lifetime and the call stack stays flat
//! for any n.

use tracing::{debug, trace};

use crate::cache::FibCache;
use crate::calculator::{validate_index, FibError};

/// Compute F(n), reusing and extending `cache`.
///
/// A cached index is answered in O(1). Otherwise the cache is filled from its
/// highest entry up to n, storing each new value. Overflow is detected with
/// `checked_add`; values stored before the overflow remain cached.
///
/// # Example
/// ```
/// use fibmemo_core::cache::FibCache;
/// use fibmemo_core::memoized::memoized_fib;
///
/// let mut cache = FibCache::new();
/// assert_eq!(memoized_fib(50, &mut cache), Ok(12_586_269_025));
/// assert!(cache.contains(50));
/// ```
pub fn memoized_fib(n: i64, cache: &mut FibCache) -> Result<i64, FibError> {
    let index = validate_index(n)?;

    if let Some(value) = cache.lookup(index) {
        trace!(n, "cache hit");
        return Ok(value);
    }
    if index <= 2 {
        return Ok(1);
    }

    let frontier = cache.frontier();
    debug!(from = frontier.index + 1, to = index, "filling cache");

    let mut k = frontier.index;
    let mut previous = frontier.previous;
    let mut current = frontier.current;
    while k < index {
        let next = previous
            .checked_add(current)
            .ok_or(FibError::Overflow(n))?;
        k += 1;
        cache.insert(k, next);
        previous = current;
        current = next;
    }
    Ok(current)
}
