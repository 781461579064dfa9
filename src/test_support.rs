//! In-memory port implementations shared by unit tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::context::ServiceContext;
use crate::ports::{Clock, FileSystem};

/// In-memory filesystem. Clones share the same files so a test can keep a
/// handle after moving one into a `ServiceContext`.
#[derive(Clone, Default)]
pub(crate) struct MemFs {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl MemFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(path: &str, contents: &str) -> Self {
        let fs = Self::new();
        fs.files.lock().unwrap().insert(PathBuf::from(path), contents.to_string());
        fs
    }

    pub(crate) fn contents(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

impl FileSystem for MemFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("File not found: {}", path.display()))
        })
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Clock that starts at a fixed instant and moves one second per call.
pub(crate) struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub(crate) fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    pub(crate) fn new() -> Self {
        Self { next: Mutex::new(Self::start()) }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}

/// Context wired to `fs` and a fresh stepping clock.
pub(crate) fn context(fs: &MemFs) -> ServiceContext {
    ServiceContext::new(Box::new(SteppingClock::new()), Box::new(fs.clone()))
}
