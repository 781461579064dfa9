//! Status filter for `list`.

use std::fmt;
use std::str::FromStr;

use super::record::Task;
use super::status::Status;

/// Which tasks `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    /// Every task.
    #[default]
    All,
    /// Only `done` tasks.
    Done,
    /// Only `todo` tasks.
    Todo,
    /// Only `in-progress` tasks.
    InProgress,
}

impl ListFilter {
    /// Accepted filter tokens, in help order.
    pub const TOKENS: [&'static str; 4] = ["all", "done", "todo", "in-progress"];

    /// Returns `true` if `task` passes this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Done => task.status == Status::Done,
            Self::Todo => task.status == Status::Todo,
            Self::InProgress => task.status == Status::InProgress,
        }
    }

    /// Message shown instead of a table when the filter selects nothing.
    ///
    /// `All` has none: an empty store still renders an empty table.
    #[must_use]
    pub fn empty_message(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Done => Some("You don't have any completed task"),
            Self::InProgress => Some("There are no tasks in progress"),
            Self::Todo => Some("There is no any todo task, add tasks"),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Done => "done",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
        }
    }
}

impl FromStr for ListFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "done" => Ok(Self::Done),
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            other => Err(format!(
                "unknown filter `{other}` (expected one of: {})",
                Self::TOKENS.join(", ")
            )),
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
