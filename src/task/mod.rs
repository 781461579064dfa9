//! Task data model.
//!
//! A task is persisted as one record in the database mapping. The types here
//! own the exact external tokens (`todo`, `in-progress`, `done`,
//! `mark-done`, ...) so the rest of the crate only deals in enums.

mod action;
mod filter;
mod record;
mod status;
mod timestamp;

pub use action::UpdateAction;
pub use filter::ListFilter;
pub use record::Task;
pub use status::Status;
