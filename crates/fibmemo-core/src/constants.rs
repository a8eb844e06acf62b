//! Constants for index bounds, reference values, and process exit codes.

/// Smallest valid Fibonacci index. F(1) = F(2) = 1.
pub const MIN_FIB_INDEX: u64 = 1;

/// Maximum Fibonacci index whose value fits in an `i64`.
/// F(92) = 7540113804746346429
pub const MAX_FIB_INDEX: u64 = 92;

/// Precomputed Fibonacci values for n = 0..=92.
///
/// F(92) = 7,540,113,804,746,346,429 is the largest Fibonacci number that
/// fits in `i64`. F(93) = 12,200,160,415,121,876,738 exceeds `i64::MAX`
/// (9,223,372,036,854,775,807).
pub const FIB_TABLE: [i64; 93] = {
    let mut table = [0i64; 93];
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including "quit" and end of input.
    pub const SUCCESS: i32 = 0;
    /// A calculation failed in one-shot mode.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (e.g. unknown algorithm).
    pub const ERROR_CONFIG: i32 = 4;
    /// Reading from or writing to the console failed (`EX_IOERR`).
    pub const ERROR_IO: i32 = 74;
}
