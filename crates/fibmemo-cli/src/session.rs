//! Interactive read-compute-print loop.
//!
//! A `Session` borrows the calculator and the cache from its caller, so the
//! cache outlives the loop and is the only state shared between iterations.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{debug, info};

use fibmemo_core::cache::FibCache;
use fibmemo_core::calculator::{Calculator, FibError};

use crate::input::{parse_input, Input};
use crate::presenter::ConsolePresenter;

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user typed "quit".
    Quit,
    /// The input stream was exhausted.
    EndOfInput,
}

/// One user driving one loop over a long-lived cache.
pub struct Session<'a> {
    calculator: &'a dyn Calculator,
    cache: &'a mut FibCache,
    presenter: ConsolePresenter,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(
        calculator: &'a dyn Calculator,
        cache: &'a mut FibCache,
        presenter: ConsolePresenter,
    ) -> Self {
        Self {
            calculator,
            cache,
            presenter,
        }
    }

    /// Run the loop until "quit" or end of input.
    ///
    /// Only I/O failures are returned as errors; calculation errors and
    /// unparsable lines are reported on `output` and the loop continues.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<Outcome> {
        info!(algorithm = self.calculator.name(), "session started");
        let mut line = String::new();
        loop {
            self.presenter.prompt(&mut output)?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                self.presenter.end_of_input(&mut output)?;
                info!(cached = self.cache.len(), "input closed, session ended");
                return Ok(Outcome::EndOfInput);
            }

            match parse_input(&line) {
                Input::Quit => {
                    self.presenter.farewell(&mut output)?;
                    info!(cached = self.cache.len(), "session ended by user");
                    return Ok(Outcome::Quit);
                }
                Input::Number(n) => {
                    // Calculation errors are already reported on `output`.
                    let _ = self.evaluate(n, &mut output)?;
                }
                Input::Invalid => {
                    debug!(input = line.trim(), "not a number");
                    self.presenter.not_a_number(&mut output)?;
                }
            }
        }
    }

    /// Compute F(n) with the session cache and report the value or error.
    pub fn evaluate<W: Write>(
        &mut self,
        n: i64,
        output: &mut W,
    ) -> io::Result<Result<i64, FibError>> {
        let start = Instant::now();
        let result = self.calculator.calculate(n, self.cache);
        let elapsed = start.elapsed();

        match &result {
            Ok(value) => {
                debug!(n, value, ?elapsed, "computed");
                self.presenter.value(output, *value)?;
                self.presenter
                    .details(output, self.calculator.name(), elapsed, self.cache.stats())?;
            }
            Err(err) => {
                debug!(n, %err, "calculation failed");
                self.presenter.error(output, err)?;
            }
        }
        Ok(result)
    }
}
