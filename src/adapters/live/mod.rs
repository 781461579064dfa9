//! Live adapters backed by the system clock and the real disk.

pub mod clock;
pub mod filesystem;
