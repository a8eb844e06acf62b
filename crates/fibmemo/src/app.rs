//! Application entry point and dispatch.

use std::io;

use anyhow::{Context, Result};
use tracing::{debug, info};

use fibmemo_cli::presenter::ConsolePresenter;
use fibmemo_cli::session::Session;
use fibmemo_cli::ui::use_color;
use fibmemo_core::cache::FibCache;
use fibmemo_core::constants::exit_codes;
use fibmemo_core::registry::calculator_for;

use crate::config::AppConfig;
use crate::errors::fib_error_code;
use crate::version::full_version;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibmemo_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let calculator = calculator_for(&config.algo)?;
    info!(version = %full_version(), algorithm = calculator.name(), "starting");

    // One cache for the whole process, lent to every calculation.
    let mut cache = FibCache::new();
    let presenter = ConsolePresenter::new(use_color(), config.details);
    let mut session = Session::new(calculator.as_ref(), &mut cache, presenter);

    if config.is_one_shot() {
        return run_one_shot(&mut session, &config.n);
    }

    let outcome = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("console I/O failed")?;
    debug!(?outcome, "session finished");
    Ok(exit_codes::SUCCESS)
}

fn run_one_shot(session: &mut Session<'_>, indices: &[i64]) -> Result<i32> {
    let mut out = io::stdout().lock();
    let mut code = exit_codes::SUCCESS;
    for &n in indices {
        let result = session
            .evaluate(n, &mut out)
            .context("console I/O failed")?;
        if let Err(err) = result {
            code = fib_error_code(&err);
        }
    }
    Ok(code)
}
