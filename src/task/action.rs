//! Update intent for an existing task.

use super::status::Status;

/// Token that marks a task as in progress.
pub(crate) const MARK_IN_PROGRESS: &str = "mark-in-progress";
/// Token that marks a task as done.
pub(crate) const MARK_DONE: &str = "mark-done";

/// What an `update` does to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Move the task to a new status.
    SetStatus(Status),
    /// Replace the description. Unlike `add`, an empty value is accepted.
    SetDescription(String),
}

impl UpdateAction {
    /// Interprets the free-form value passed to `update`.
    ///
    /// The exact tokens `mark-in-progress` and `mark-done` change the status;
    /// any other value becomes the new description verbatim.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            MARK_IN_PROGRESS => Self::SetStatus(Status::InProgress),
            MARK_DONE => Self::SetStatus(Status::Done),
            other => Self::SetDescription(other.to_string()),
        }
    }
}
