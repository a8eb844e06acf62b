//! Calculator lookup by name.

use crate::calculator::{Calculator, FibError, MemoizedCalculator, NaiveCalculator};

/// Names accepted by [`calculator_for`], in display order.
pub const AVAILABLE: [&str; 2] = ["memo", "naive"];

/// Create the calculator registered under `name`.
pub fn calculator_for(name: &str) -> Result<Box<dyn Calculator>, FibError> {
    match name.to_ascii_lowercase().as_str() {
        "memo" | "memoized" => Ok(Box::new(MemoizedCalculator::new())),
        "naive" | "recursive" => Ok(Box::new(NaiveCalculator::new())),
        _ => Err(FibError::Config(format!(
            "unknown algorithm: {name} (expected one of: {})",
            AVAILABLE.join(", ")
        ))),
    }
}
