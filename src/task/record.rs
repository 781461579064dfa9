//! The persisted task record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::action::UpdateAction;
use super::status::Status;
use super::timestamp;

/// One task as stored in the database file.
///
/// Field order matches the on-disk record and the listing columns. Fields
/// this version does not know about are kept in `extra` and written back
/// after `updatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// What needs doing.
    pub description: String,
    /// Positive id, unique within the store.
    pub id: u64,
    /// Current lifecycle state.
    pub status: Status,
    /// Set once at creation.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every change.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Unrecognised fields from a hand-edited or newer file.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Creates a `todo` task stamped with `now`.
    #[must_use]
    pub fn new(id: u64, description: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            description: description.into(),
            id,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }

    /// Applies an update and refreshes `updated_at`.
    ///
    /// `updated_at` never goes below `created_at`, even if the clock stepped back.
    pub fn apply(&mut self, action: &UpdateAction, now: DateTime<Utc>) {
        match action {
            UpdateAction::SetStatus(status) => self.status = *status,
            UpdateAction::SetDescription(text) => self.description.clone_from(text),
        }
        self.updated_at = now.max(self.created_at);
    }

    /// `createdAt` as written to disk.
    #[must_use]
    pub fn created_at_display(&self) -> String {
        timestamp::format(&self.created_at)
    }

    /// `updatedAt` as written to disk.
    #[must_use]
    pub fn updated_at_display(&self) -> String {
        timestamp::format(&self.updated_at)
    }
}
