//! Task store: the persistence layer over a single JSON database file.
//!
//! Every operation is a full cycle against the file: load everything,
//! change at most one task in memory, write everything back. There is no
//! caching between calls and no locking; concurrent invocations race and the
//! last writer wins.
//!
//! All I/O goes through `ctx.fs` and all timestamps through `ctx.clock`, so
//! the store runs unchanged against the live adapters and test doubles.

mod tasks;

pub use tasks::Tasks;

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::error::{Result, TaskError};
use crate::task::{ListFilter, Task, UpdateAction};

/// Handle on the task database file.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> TaskStore<'a> {
    /// Opens the store at `path`, writing an empty mapping first if the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::StorageIo`] if the initial file cannot be written.
    pub fn open_or_create(ctx: &'a ServiceContext, path: &Path) -> Result<Self> {
        let store = Self { ctx, path: path.to_path_buf() };
        if !ctx.fs.exists(path) {
            info!(path = %path.display(), "creating empty task database");
            store.save(&Tasks::new())?;
        }
        Ok(store)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole database.
    ///
    /// A file holding only whitespace loads as an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::StorageIo`] if the file cannot be read and
    /// [`TaskError::StorageCorrupt`] if it is not UTF-8 or not a valid task
    /// mapping.
    pub fn load(&self) -> Result<Tasks> {
        let contents = self.ctx.fs.read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                TaskError::StorageCorrupt { path: self.path.clone(), reason: e.to_string() }
            } else {
                self.io_error(&e)
            }
        })?;
        if contents.trim().is_empty() {
            debug!(path = %self.path.display(), "task database is blank");
            return Ok(Tasks::new());
        }
        let tasks: Tasks = serde_json::from_str(&contents).map_err(|e| TaskError::StorageCorrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Writes the whole database, replacing the file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::StorageIo`] if serialization or the write fails.
    /// The previous file contents are left intact in that case.
    pub fn save(&self, tasks: &Tasks) -> Result<()> {
        let json = to_pretty_json(tasks).map_err(|e| self.io_error(&e))?;
        self.ctx.fs.write_atomic(&self.path, &json).map_err(|e| self.io_error(&e))?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Adds a `todo` task and returns its id.
    ///
    /// The id is one more than the most recently inserted task's id (1 for an
    /// empty store). Only a hand-edited file can make that id collide with an
    /// existing one or run past `u64::MAX`; the store then falls back to the
    /// largest id plus one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyDescription`] without touching the file if
    /// `description` is empty, [`TaskError::IdsExhausted`] without touching
    /// the file if the largest id is `u64::MAX`, or any load/save error.
    pub fn create(&self, description: &str) -> Result<u64> {
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut tasks = self.load()?;
        let id = match tasks.next_id() {
            Some(id) if tasks.get(id).is_none() => id,
            next => {
                let max = tasks.max_id();
                let fallback = max.checked_add(1).ok_or(TaskError::IdsExhausted(max))?;
                warn!(?next, fallback, "next id unusable, using max id instead");
                fallback
            }
        };

        tasks.push(Task::new(id, description, self.ctx.clock.now()));
        self.save(&tasks)?;
        info!(id, "task created");
        Ok(id)
    }

    /// Applies `action` to task `id` and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] without writing if `id` is absent,
    /// or any load/save error.
    pub fn update(&self, id: u64, action: &UpdateAction) -> Result<Task> {
        let mut tasks = self.load()?;
        let now = self.ctx.clock.now();
        let task = tasks.get_mut(id).ok_or(TaskError::TaskNotFound(id))?;
        task.apply(action, now);
        let updated = task.clone();

        self.save(&tasks)?;
        info!(id, status = %updated.status, "task updated");
        Ok(updated)
    }

    /// Removes task `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] without writing if `id` is absent,
    /// or any load/save error.
    pub fn delete(&self, id: u64) -> Result<Task> {
        let mut tasks = self.load()?;
        let removed = tasks.remove(id).ok_or(TaskError::TaskNotFound(id))?;
        self.save(&tasks)?;
        info!(id, "task deleted");
        Ok(removed)
    }

    /// Tasks matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns any load error.
    pub fn list(&self, filter: ListFilter) -> Result<Vec<Task>> {
        Ok(self.load()?.filtered(filter))
    }

    fn io_error(&self, err: &io::Error) -> TaskError {
        TaskError::StorageIo { path: self.path.clone(), reason: err.to_string() }
    }
}

/// Serializes with a four-space indent and a trailing newline.
fn to_pretty_json(tasks: &Tasks) -> io::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut ser)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
