//! Path utilities for the ekitrans database file.
//!
//! The file lives in a data root, resolved in this order:
//! 1. `EKITRANS_DATA_DIR` environment variable
//! 2. System data directory (e.g. `~/.local/share/ekitrans`)
//!
//! The database file defaults to `ekitrans.db` inside the data root and can
//! be moved with `EKITRANS_DATABASE`.

mod error;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::PathError;

/// Override for the data root.
pub const DATA_DIR_ENV: &str = "EKITRANS_DATA_DIR";

/// Override for the database file.
pub const DATABASE_ENV: &str = "EKITRANS_DATABASE";

const APP_DIR: &str = "ekitrans";
const DATABASE_FILE: &str = "ekitrans.db";

/// Get the path to the `SQLite` database file.
///
/// The parent directory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let path = resolve_database_path(|name| env::var(name).ok(), dirs::data_local_dir())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    Ok(path)
}

fn resolve_data_root<F>(lookup: F, system_dir: Option<PathBuf>) -> Result<PathBuf, PathError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(DATA_DIR_ENV) {
        return non_empty(DATA_DIR_ENV, &raw);
    }
    system_dir
        .map(|dir| dir.join(APP_DIR))
        .ok_or(PathError::NoDataDir)
}

fn resolve_database_path<F>(lookup: F, system_dir: Option<PathBuf>) -> Result<PathBuf, PathError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(DATABASE_ENV) {
        return non_empty(DATABASE_ENV, &raw);
    }
    Ok(resolve_data_root(lookup, system_dir)?.join(DATABASE_FILE))
}

fn non_empty(var: &'static str, raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath(var));
    }
    Ok(PathBuf::from(trimmed))
}

fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}
