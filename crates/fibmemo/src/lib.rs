//! FibMemo library: application logic for the interactive calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
