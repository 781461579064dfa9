//! Clock port used to stamp task timestamps.

use chrono::{DateTime, Utc};

/// Source of "now" for `createdAt` / `updatedAt`.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
