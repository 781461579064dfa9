//! Runtime configuration: where the database lives and whether to log.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

/// Overrides the database file path.
pub const DB_ENV: &str = "TASK_CLI_DB";
/// Enables diagnostic logging on stderr when set.
pub const DEBUG_ENV: &str = "TASK_CLI_DEBUG";
/// Database file used when `TASK_CLI_DB` is unset, relative to the working directory.
pub const DEFAULT_DB: &str = "database.json";

/// Loads `.env` from the working directory if present.
///
/// Variables already set in the environment win over the file.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => eprintln!("Warning: ignoring malformed .env: {err}"),
    }
}

/// Resolves the database path from `TASK_CLI_DB`.
#[must_use]
pub fn database_path() -> PathBuf {
    database_path_from(std::env::var_os(DB_ENV))
}

fn database_path_from(value: Option<OsString>) -> PathBuf {
    value.filter(|v| !v.is_empty()).map_or_else(|| PathBuf::from(DEFAULT_DB), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_database_json() {
        assert_eq!(database_path_from(None), PathBuf::from("database.json"));
    }

    #[test]
    fn empty_override_is_ignored() {
        assert_eq!(database_path_from(Some(OsString::new())), PathBuf::from("database.json"));
    }

    #[test]
    fn override_is_used_verbatim() {
        assert_eq!(
            database_path_from(Some(OsString::from("/tmp/tasks/db.json"))),
            PathBuf::from("/tmp/tasks/db.json")
        );
    }
}
