//! Console presenter for the interactive session.

use std::io::{self, Write};
use std::time::Duration;

use fibmemo_core::cache::CacheStats;
use fibmemo_core::calculator::FibError;

use crate::output::format_details;
use crate::ui::error_prefix;

/// Prompt written before every read.
pub const PROMPT: &str = "Please enter a value or enter 'Quit' to exit the application: ";

/// Line written when the user quits.
pub const FAREWELL: &str = "Thank you! Have a great day!";

/// Line written when the input is neither "quit" nor an integer.
pub const NOT_A_NUMBER: &str = "Please only enter a number.";

/// Writes session output to any `Write` sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter {
    color: bool,
    details: bool,
}

impl ConsolePresenter {
    #[must_use]
    pub fn new(color: bool, details: bool) -> Self {
        Self { color, details }
    }

    #[must_use]
    pub fn details_enabled(&self) -> bool {
        self.details
    }

    /// Write the prompt and flush so it shows before the read blocks.
    pub fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{PROMPT}")?;
        out.flush()
    }

    pub fn value<W: Write>(&self, out: &mut W, value: i64) -> io::Result<()> {
        writeln!(out, "{value}")
    }

    pub fn details<W: Write>(
        &self,
        out: &mut W,
        algorithm: &str,
        elapsed: Duration,
        stats: CacheStats,
    ) -> io::Result<()> {
        if !self.details {
            return Ok(());
        }
        writeln!(out, "{}", format_details(algorithm, elapsed, stats))
    }

    pub fn error<W: Write>(&self, out: &mut W, err: &FibError) -> io::Result<()> {
        writeln!(out, "{} {err}", error_prefix(self.color))
    }

    pub fn not_a_number<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{NOT_A_NUMBER}")
    }

    pub fn farewell<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{FAREWELL}")
    }

    /// Terminate the dangling prompt line when input runs out.
    pub fn end_of_input<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)
    }
}
