//! Core library for the `task-cli` personal task tracker.
//!
//! Tasks live in one JSON file (`database.json` by default). Each
//! invocation loads the whole file, applies at most one change through
//! [`store::TaskStore`], and writes it back.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod render;
pub mod store;
pub mod task;

#[cfg(test)]
pub(crate) mod test_support;

use clap::Parser;

pub use error::{Result, TaskError};

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print and return `Ok`.
///
/// # Errors
///
/// Returns [`TaskError::Usage`] when argument parsing fails, or the command's
/// own error.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(TaskError::Usage(err.to_string())),
    };
    commands::dispatch(&cli.command)
}
