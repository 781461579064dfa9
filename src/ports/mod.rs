//! Port traits for the two things the store touches outside the process:
//! wall-clock time and the backing file.
//!
//! Live implementations are in `src/adapters/live/`; tests plug in
//! in-memory versions.

pub mod clock;
pub mod filesystem;

pub use clock::Clock;
pub use filesystem::FileSystem;
