//! Access to the externally-owned journal database file.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Handle on the Day One SQLite file. Every operation opens a fresh
/// read-only connection and drops it when done; no connection outlives a
/// single call and no statement ever writes.
pub struct JournalDb {
    path: PathBuf,
}

impl JournalDb {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file gets a guidance message before sqlite ever sees
    /// the path; its absence is a setup problem on the Day One side.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            Ok(())
        } else {
            Err(AppError::StoreUnavailable(format!(
                "journal database not found at {}. Make sure the Day One app is installed and has been run at least once.",
                self.path.display()
            )))
        }
    }

    /// Open a read-only connection for one operation.
    pub fn connect(&self) -> AppResult<Connection> {
        self.ensure_exists()?;

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }
}
