//! Live filesystem adapter using `std::fs`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// Filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Temp file lives next to the target so the rename stays on one filesystem.
        let temp_path = temp_path_for(path);
        let result = (|| {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
            drop(file);
            fs::rename(&temp_path, path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path.file_name().map_or_else(
        || "database.json".to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    path.with_file_name(format!("{name}.tmp.{}", std::process::id()))
}
