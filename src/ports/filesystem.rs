//! Filesystem port for the task database file.

use std::io;
use std::path::Path;

/// File access needed by the task store.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replaces the file at `path` with `contents`.
    ///
    /// Implementations must not leave a half-written file behind: either the
    /// new contents are fully in place or the previous contents are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or the final replace fails.
    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;
}
