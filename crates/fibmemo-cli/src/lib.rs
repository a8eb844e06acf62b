//! # fibmemo-cli
//!
//! Interactive session loop, console output, and shell completion.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;
pub mod session;
pub mod ui;

pub use input::{parse_input, Input};
pub use presenter::ConsolePresenter;
pub use session::{Outcome, Session};
