//! Lazily opened, single-owner database handle.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::schema::{open_database, SchemaError};

/// Holds at most one open connection to the movie store.
///
/// The handle is opened on the first call to [`connection`](Self::connection)
/// and reused afterwards. A failed open leaves the manager closed, so the
/// next call tries again from scratch. Not `Sync`: give each thread its own
/// manager.
#[derive(Debug)]
pub struct ConnectionManager {
    path: Option<PathBuf>,
    conn: OnceCell<Connection>,
}

impl ConnectionManager {
    /// Manager for the store at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            conn: OnceCell::new(),
        }
    }

    /// Manager around a connection that is already open.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            path: None,
            conn: OnceCell::from(conn),
        }
    }

    /// Location of the backing store, if this manager opens one itself.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.conn.get().is_some()
    }

    /// The shared handle, opening it on first use.
    pub fn connection(&self) -> Result<&Connection, SchemaError> {
        if let Some(conn) = self.conn.get() {
            return Ok(conn);
        }
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| SchemaError::NotFound("<no database path>".to_string()))?;
        let conn = open_database(path)?;
        Ok(self.conn.get_or_init(|| conn))
    }
}
