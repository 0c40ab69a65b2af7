//! Insert operations used to populate a movie store.
//!
//! The query service never writes; these exist for loaders and fixtures.

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::models::{Actor, Casting, Movie};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

/// Insert a movie row.
pub fn insert_movie(conn: &Connection, movie: &Movie) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO movies (id, title, yr) VALUES (?1, ?2, ?3)",
        params![movie.id, movie.title, movie.yr],
    )?;
    Ok(())
}

/// Insert an actor row.
pub fn insert_actor(conn: &Connection, actor: &Actor) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO actors (id, name) VALUES (?1, ?2)",
        params![actor.id, actor.name],
    )?;
    Ok(())
}

/// Insert a casting row. The referenced movie and actor are not checked.
pub fn insert_casting(conn: &Connection, casting: &Casting) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO castings (movie_id, actor_id, ord) VALUES (?1, ?2, ?3)",
        params![casting.movie_id, casting.actor_id, casting.ord],
    )?;
    Ok(())
}
