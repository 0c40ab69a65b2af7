//! SQLite schema creation and store opening.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database not found: {0}")]
    NotFound(String),
}

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent, so it is safe to call on a populated database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open an existing movie database read-only.
///
/// The store is not created and the schema is not checked here; a store
/// missing a table fails when the first query touches it.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::NotFound(path.display().to_string()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    // SQLite defers reading the header until first use; force it so a file
    // that is not a database fails here instead of on the first query.
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })?;
    log::debug!("Opened movie database at {}", path.display());
    Ok(conn)
}

/// Open or create a writable movie database and apply the schema.
pub fn create_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    log::debug!("Created movie database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    yr INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_movies_title ON movies(title);
CREATE INDEX IF NOT EXISTS idx_movies_yr ON movies(yr);

CREATE TABLE IF NOT EXISTS actors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_actors_name ON actors(name);

-- No REFERENCES clauses: actors without castings are valid rows.
CREATE TABLE IF NOT EXISTS castings (
    movie_id INTEGER NOT NULL,
    actor_id INTEGER NOT NULL,
    ord INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_castings_movie ON castings(movie_id);
CREATE INDEX IF NOT EXISTS idx_castings_actor ON castings(actor_id);
"#;
