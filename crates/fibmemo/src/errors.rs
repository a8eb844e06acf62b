//! Error handling and exit codes.

use fibmemo_core::calculator::FibError;
use fibmemo_core::constants::exit_codes;

/// Exit code for a calculation error.
pub fn fib_error_code(err: &FibError) -> i32 {
    match err {
        FibError::InvalidArgument(_) | FibError::Overflow(_) => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an error that ended the application.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(fib) = err.downcast_ref::<FibError>() {
        fib_error_code(fib)
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        exit_codes::ERROR_IO
    } else {
        exit_codes::ERROR_GENERIC
    }
}
