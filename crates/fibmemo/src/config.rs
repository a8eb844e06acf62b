//! Application configuration from CLI flags and environment.

use clap::Parser;
use tracing::Level;

/// FibMemo: interactive Fibonacci calculator with a memoized cache.
///
/// Without `-n`, prompts for indices until "quit" or end of input.
#[derive(Parser, Debug)]
#[command(name = "fibmemo", version, about)]
pub struct AppConfig {
    /// Algorithm to use: memo or naive.
    #[arg(long, default_value = "memo", env = "FIBMEMO_ALGO")]
    pub algo: String,

    /// Compute these indices and exit instead of prompting (repeatable or comma-separated).
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub n: Vec<i64>,

    /// Print algorithm, elapsed time and cache statistics after each value.
    #[arg(short, long)]
    pub details: bool,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default log level when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Whether to run the indices given on the command line instead of prompting.
    #[must_use]
    pub fn is_one_shot(&self) -> bool {
        !self.n.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibmemo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert!(!config.is_one_shot());
        assert!(!config.details);
        assert_eq!(config.log_level(), Level::WARN);
        assert!(config.completion.is_none());
    }

    #[test]
    fn repeated_and_delimited_indices() {
        let config = parse(&["-n", "6", "-n", "7,8"]);
        assert_eq!(config.n, [6, 7, 8]);
        assert!(config.is_one_shot());
    }

    #[test]
    fn negative_index_is_accepted_by_the_parser() {
        let config = parse(&["-n", "-5"]);
        assert_eq!(config.n, [-5]);
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(parse(&["-v"]).log_level(), Level::DEBUG);
    }

    #[test]
    fn algo_flag() {
        assert_eq!(parse(&["--algo", "naive"]).algo, "naive");
    }
}
