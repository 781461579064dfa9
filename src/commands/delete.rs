//! `task-cli delete` command.

use crate::error::Result;
use crate::store::TaskStore;

/// Execute the `delete` command.
///
/// # Errors
///
/// Returns an error if the task does not exist or the store fails.
pub fn run(store: &TaskStore<'_>, id: u64) -> Result<String> {
    store.delete(id)?;
    Ok(format!("Task with (ID: {id}) has been deleted successfully.\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::test_support::{context, MemFs};
    use std::path::Path;

    #[test]
    fn deletes_and_confirms() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        let store = TaskStore::open_or_create(&ctx, Path::new("/db.json")).unwrap();
        store.create("buy milk").unwrap();

        assert_eq!(run(&store, 1).unwrap(), "Task with (ID: 1) has been deleted successfully.\n");
        assert!(store.load().unwrap().is_empty());
        assert!(matches!(run(&store, 1), Err(TaskError::TaskNotFound(1))));
    }
}
