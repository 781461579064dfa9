//! Command dispatch and handlers.
//!
//! Handlers return the text to print on success; failures come back as
//! [`TaskError`](crate::error::TaskError) and are reported by the binary.

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

use std::path::Path;

use tracing::debug;

use crate::cli::Command;
use crate::config;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::store::TaskStore;
use crate::task::{Status, UpdateAction};

/// Dispatch a parsed command against the live context and configured database.
///
/// # Errors
///
/// Returns an error if the selected command fails.
pub fn dispatch(command: &Command) -> Result<()> {
    let ctx = ServiceContext::live();
    let path = config::database_path();
    let output = dispatch_with_context(command, &ctx, &path)?;
    print!("{output}");
    Ok(())
}

/// Run a command with the given service context and database path,
/// returning what it would print.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the command fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    path: &Path,
) -> Result<String> {
    debug!(?command, path = %path.display(), "dispatching");
    let store = TaskStore::open_or_create(ctx, path)?;

    match command {
        Command::Add { description } => add::run(&store, description),
        Command::Update { id, value } => update::run(&store, *id, &UpdateAction::from_value(value)),
        Command::MarkInProgress { id } => {
            update::run(&store, *id, &UpdateAction::SetStatus(Status::InProgress))
        }
        Command::MarkDone { id } => update::run(&store, *id, &UpdateAction::SetStatus(Status::Done)),
        Command::Delete { id } => delete::run(&store, *id),
        Command::List { filter } => list::run(&store, *filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::task::ListFilter;
    use crate::test_support::{context, MemFs};

    const DB: &str = "/work/database.json";

    fn run(ctx: &ServiceContext, command: Command) -> Result<String> {
        dispatch_with_context(&command, ctx, Path::new(DB))
    }

    #[test]
    fn first_command_creates_database() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        run(&ctx, Command::List { filter: ListFilter::All }).unwrap();
        assert_eq!(fs.contents(DB).unwrap(), "{}\n");
    }

    #[test]
    fn update_value_tokens_change_status() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        run(&ctx, Command::Add { description: "buy milk".into() }).unwrap();
        run(&ctx, Command::Update { id: 1, value: "mark-done".into() }).unwrap();

        let done = run(&ctx, Command::List { filter: ListFilter::Done }).unwrap();
        assert!(done.contains("buy milk"));
    }

    #[test]
    fn mark_commands_set_status() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        run(&ctx, Command::Add { description: "buy milk".into() }).unwrap();
        run(&ctx, Command::Add { description: "clean house".into() }).unwrap();
        run(&ctx, Command::MarkInProgress { id: 1 }).unwrap();
        run(&ctx, Command::MarkDone { id: 2 }).unwrap();

        let in_progress = run(&ctx, Command::List { filter: ListFilter::InProgress }).unwrap();
        assert!(in_progress.contains("buy milk") && !in_progress.contains("clean house"));
        let done = run(&ctx, Command::List { filter: ListFilter::Done }).unwrap();
        assert!(done.contains("clean house") && !done.contains("buy milk"));
    }

    #[test]
    fn not_found_surfaces_as_error() {
        let fs = MemFs::new();
        let ctx = context(&fs);
        let err = run(&ctx, Command::Delete { id: 9 }).unwrap_err();
        assert!(matches!(err, TaskError::TaskNotFound(9)));
    }

    #[test]
    fn corrupt_database_is_reported() {
        let fs = MemFs::with_file(DB, "[1, 2, 3]");
        let ctx = context(&fs);
        let err = run(&ctx, Command::List { filter: ListFilter::All }).unwrap_err();
        assert!(matches!(err, TaskError::StorageCorrupt { .. }));
    }
}
