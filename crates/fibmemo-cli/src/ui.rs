//! Terminal styling helpers.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Whether styled output should be written to stdout.
#[must_use]
pub fn use_color() -> bool {
    !is_color_disabled() && console::user_attended()
}

/// Prefix for error lines.
#[must_use]
pub fn error_prefix(color: bool) -> String {
    if color {
        style("Error:").red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    let color = !is_color_disabled() && console::Term::stderr().features().colors_supported();
    eprintln!("{} {text}", error_prefix(color));
}
