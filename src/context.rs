//! Service context bundling the port trait objects.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// The external boundaries a command may touch.
pub struct ServiceContext {
    /// Clock for task timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem holding the task database.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Context backed by the system clock and the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveClock), Box::new(LiveFileSystem))
    }

    /// Context with explicit adapters.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, fs: Box<dyn FileSystem>) -> Self {
        Self { clock, fs }
    }
}
