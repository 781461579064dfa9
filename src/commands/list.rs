//! `task-cli list` command.

use crate::error::Result;
use crate::render;
use crate::store::TaskStore;
use crate::task::ListFilter;

/// Execute the `list` command.
///
/// Renders matching tasks as a table. A filter other than `all` that
/// matches nothing prints its own message instead.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded.
pub fn run(store: &TaskStore<'_>, filter: ListFilter) -> Result<String> {
    let tasks = store.list(filter)?;
    if tasks.is_empty() {
        if let Some(message) = filter.empty_message() {
            return Ok(format!("{message}\n"));
        }
    }
    Ok(render::task_table(&tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::UpdateAction;
    use crate::test_support::{context, MemFs};
    use std::path::Path;

    #[test]
    fn empty_store_all_renders_empty_table() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        let store = TaskStore::open_or_create(&ctx, Path::new("/db.json")).unwrap();

        let out = run(&store, ListFilter::All).unwrap();
        assert!(out.starts_with("+-"));
        assert!(out.contains("description"));
    }

    #[test]
    fn empty_filters_print_their_messages() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        let store = TaskStore::open_or_create(&ctx, Path::new("/db.json")).unwrap();
        store.create("buy milk").unwrap();

        assert_eq!(run(&store, ListFilter::Done).unwrap(), "You don't have any completed task\n");
        assert_eq!(
            run(&store, ListFilter::InProgress).unwrap(),
            "There are no tasks in progress\n"
        );
        store.update(1, &UpdateAction::from_value("mark-done")).unwrap();
        assert_eq!(
            run(&store, ListFilter::Todo).unwrap(),
            "There is no any todo task, add tasks\n"
        );
    }

    #[test]
    fn filtered_table_contains_only_matches() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        let store = TaskStore::open_or_create(&ctx, Path::new("/db.json")).unwrap();
        store.create("buy milk").unwrap();
        store.create("clean house").unwrap();
        store.update(2, &UpdateAction::from_value("mark-done")).unwrap();

        let out = run(&store, ListFilter::Done).unwrap();
        assert!(out.contains("clean house"));
        assert!(!out.contains("buy milk"));
    }
}
