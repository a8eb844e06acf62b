//! Workspace-level test harness for FibMemo.
//!
//! The integration tests under `tests/` exercise `fibmemo-core` and
//! `fibmemo-cli` together against golden data.
