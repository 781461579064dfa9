//! `task-cli update`, `mark-in-progress` and `mark-done` commands.

use crate::error::Result;
use crate::store::TaskStore;
use crate::task::UpdateAction;

/// Execute an update against task `id`.
///
/// # Errors
///
/// Returns an error if the task does not exist or the store fails.
pub fn run(store: &TaskStore<'_>, id: u64, action: &UpdateAction) -> Result<String> {
    store.update(id, action)?;
    Ok(format!("Task with (ID: {id}) updated successfully\n"))
}
