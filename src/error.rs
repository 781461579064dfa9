//! Error taxonomy for task operations.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a single task-cli invocation.
#[derive(Debug, Error)]
pub enum TaskError {
    /// `add` was called with an empty description.
    #[error("A task cannot have an empty description")]
    EmptyDescription,

    /// An update or delete referenced an id that is not in the store.
    #[error("Task with (ID: {0}) does not exist")]
    TaskNotFound(u64),

    /// No id is left above the ones already in the store.
    #[error("Cannot add a task: no task ids left above {0}")]
    IdsExhausted(u64),

    /// The backing file exists but is not a valid task mapping.
    #[error("Task database {} is corrupt: {reason}", path.display())]
    StorageCorrupt {
        /// Backing file that failed to parse.
        path: PathBuf,
        /// Parser or validation message.
        reason: String,
    },

    /// Reading or writing the backing file failed.
    #[error("Failed to access task database {}: {reason}", path.display())]
    StorageIo {
        /// Backing file being accessed.
        path: PathBuf,
        /// Underlying filesystem error.
        reason: String,
    },

    /// Missing or malformed command-line arguments.
    #[error("{0}")]
    Usage(String),
}

impl TaskError {
    /// Process exit code for this error.
    ///
    /// Usage problems exit with 2 (the clap convention), everything else with 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TaskError>;
