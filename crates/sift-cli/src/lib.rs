//! Sift CLI library.
//!
//! Command parsing, command execution and terminal output for the `sift`
//! binary. The pipeline itself lives in `sift-processor`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, RunSummary};
