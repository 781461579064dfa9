//! `task-cli add` command.

use crate::error::Result;
use crate::store::TaskStore;

/// Execute the `add` command.
///
/// # Errors
///
/// Returns an error if the description is empty or the store fails.
pub fn run(store: &TaskStore<'_>, description: &str) -> Result<String> {
    let id = store.create(description)?;
    Ok(format!("Task added successfully (ID: {id})\n"))
}
