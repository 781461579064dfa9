//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::task::ListFilter;

/// Top-level CLI parser for `task-cli`.
#[derive(Debug, Parser)]
#[command(name = "task-cli", version, about = "Track tasks in a local JSON file")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new task.
    Add {
        /// What needs doing.
        #[arg(allow_hyphen_values = true)]
        description: String,
    },
    /// Change a task's description.
    ///
    /// The values `mark-in-progress` and `mark-done` change the status instead.
    Update {
        /// Task id.
        id: u64,
        /// New description.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Delete a task.
    Delete {
        /// Task id.
        id: u64,
    },
    /// Mark a task as in progress.
    MarkInProgress {
        /// Task id.
        id: u64,
    },
    /// Mark a task as done.
    MarkDone {
        /// Task id.
        id: u64,
    },
    /// List tasks, optionally by status.
    List {
        /// One of: all, done, todo, in-progress.
        #[arg(default_value = "all")]
        filter: ListFilter,
    },
}
