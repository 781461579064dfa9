//! Insertion-ordered task collection and its on-disk map encoding.
//!
//! On disk the collection is a JSON object keyed by the decimal id:
//!
//! ```text
//! {
//!     "1": { "description": "buy milk", "id": 1, ... },
//!     "2": { ... }
//! }
//! ```
//!
//! Key order is significant: it is the listing order and drives id
//! assignment, so the collection is a `Vec` rather than a hash map.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::task::{ListFilter, Task};

/// All tasks in the store, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tasks {
    items: Vec<Task>,
}

impl Tasks {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.items.iter()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Looks up a task by id for modification.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.items.iter_mut().find(|t| t.id == id)
    }

    /// Id for the next task: one more than the most recently inserted id,
    /// or 1 when empty. `None` if the last id is `u64::MAX`.
    ///
    /// This tracks the last entry, not the maximum. Deleting the newest task
    /// lets its id be handed out again.
    #[must_use]
    pub fn next_id(&self) -> Option<u64> {
        self.items.last().map_or(Some(1), |t| t.id.checked_add(1))
    }

    /// Largest id in the collection, 0 when empty.
    #[must_use]
    pub fn max_id(&self) -> u64 {
        self.items.iter().map(|t| t.id).max().unwrap_or(0)
    }

    /// Appends a task. The caller guarantees the id is unused.
    pub fn push(&mut self, task: Task) {
        debug_assert!(self.get(task.id).is_none(), "duplicate task id {}", task.id);
        self.items.push(task);
    }

    /// Removes and returns the task with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: u64) -> Option<Task> {
        let pos = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Tasks passing `filter`, in insertion order.
    #[must_use]
    pub fn filtered(&self, filter: ListFilter) -> Vec<Task> {
        self.items.iter().filter(|t| filter.matches(t)).cloned().collect()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for Tasks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.items.iter().map(|t| (t.id.to_string(), t)))
    }
}

impl<'de> Deserialize<'de> for Tasks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TasksVisitor)
    }
}

struct TasksVisitor;

impl<'de> Visitor<'de> for TasksVisitor {
    type Value = Tasks;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from task id to task record")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
        let mut seen = HashSet::new();

        while let Some((key, task)) = map.next_entry::<String, Task>()? {
            let id: u64 = key
                .parse()
                .map_err(|_| de::Error::custom(format!("task key `{key}` is not an integer id")))?;
            if id == 0 {
                return Err(de::Error::custom("task id 0 is not allowed"));
            }
            if task.id != id {
                return Err(de::Error::custom(format!(
                    "task stored under key `{key}` has id {}",
                    task.id
                )));
            }
            if !seen.insert(id) {
                return Err(de::Error::custom(format!("task id {id} appears twice")));
            }
            items.push(task);
        }

        Ok(Tasks { items })
    }
}
