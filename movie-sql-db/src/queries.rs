//! Read queries for the movie database.
//!
//! Every query is a single statement with its target bound as `?1`.
//! Results are fully collected before returning; no cursor outlives a call.

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::models::*;
use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Connection error: {0}")]
    Connect(#[from] SchemaError),
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

// ── Actor Filmography ───────────────────────────────────────────────────────

/// Films the named actor appeared in, by title. A title is listed once
/// even when the actor holds several credits on it.
pub fn films_with_actor(conn: &Connection, name: &str) -> Result<Vec<FilmTitle>, QueryError> {
    require_text("name", name)?;
    log::debug!("films_with_actor({name:?})");
    let mut stmt = conn.prepare(
        "SELECT title
         FROM movies
           JOIN castings ON castings.movie_id = movies.id
           JOIN actors ON actors.id = castings.actor_id
         WHERE actors.name = ?1
         GROUP BY title
         ORDER BY title",
    )?;
    let rows = stmt.query_map(params![name], row_to_film_title)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Years in which the named actor appeared in more than two films, by year.
pub fn busiest_years_for_actor(
    conn: &Connection,
    name: &str,
) -> Result<Vec<YearCount>, QueryError> {
    require_text("name", name)?;
    log::debug!("busiest_years_for_actor({name:?})");
    let mut stmt = conn.prepare(
        "SELECT yr, COUNT(*) AS count
         FROM movies
           JOIN castings ON castings.movie_id = movies.id
           JOIN actors ON actors.id = castings.actor_id
         WHERE actors.name = ?1
         GROUP BY yr
         HAVING COUNT(*) > 2
         ORDER BY yr",
    )?;
    let rows = stmt.query_map(params![name], |row| {
        Ok(YearCount {
            yr: row.get(0)?,
            count: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Films the named actor appeared in without the lead role (`ord != 1`).
pub fn non_starring_films(conn: &Connection, name: &str) -> Result<Vec<FilmTitle>, QueryError> {
    require_text("name", name)?;
    log::debug!("non_starring_films({name:?})");
    let mut stmt = conn.prepare(
        "SELECT title
         FROM movies
           JOIN castings ON castings.movie_id = movies.id
           JOIN actors ON actors.id = castings.actor_id
         WHERE actors.name = ?1
           AND castings.ord != 1
         GROUP BY title
         ORDER BY title",
    )?;
    let rows = stmt.query_map(params![name], row_to_film_title)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Every film the named actor appeared in, paired with that film's lead.
///
/// Films are matched by title. Row order is whatever the engine produces.
pub fn lead_co_stars_of(conn: &Connection, name: &str) -> Result<Vec<FilmLead>, QueryError> {
    require_text("name", name)?;
    log::debug!("lead_co_stars_of({name:?})");
    let mut stmt = conn.prepare(
        "SELECT title, name
         FROM movies
           JOIN castings ON castings.movie_id = movies.id
           JOIN actors ON actors.id = castings.actor_id
         WHERE title IN (
             SELECT title
             FROM movies
               JOIN castings ON castings.movie_id = movies.id
               JOIN actors ON actors.id = castings.actor_id
             WHERE name = ?1
         )
           AND ord = 1",
    )?;
    let rows = stmt.query_map(params![name], row_to_film_lead)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Movie Lookups ───────────────────────────────────────────────────────────

/// Distinct actor names credited on the titled film, by name.
pub fn cast_list_for_movie(conn: &Connection, title: &str) -> Result<Vec<CastMember>, QueryError> {
    require_text("title", title)?;
    log::debug!("cast_list_for_movie({title:?})");
    let mut stmt = conn.prepare(
        "SELECT DISTINCT name
         FROM movies
           JOIN castings ON castings.movie_id = movies.id
           JOIN actors ON actors.id = castings.actor_id
         WHERE movies.title = ?1
         ORDER BY name",
    )?;
    let rows = stmt.query_map(params![title], |row| Ok(CastMember { name: row.get(0)? }))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Each film released in `yr` with its lead actor, one row per title.
pub fn lead_actors_for_year(conn: &Connection, yr: i32) -> Result<Vec<FilmLead>, QueryError> {
    log::debug!("lead_actors_for_year({yr})");
    let mut stmt = conn.prepare(
        "SELECT title, name
         FROM movies
           JOIN castings ON castings.movie_id = movies.id
           JOIN actors ON actors.id = castings.actor_id
         WHERE yr = ?1
           AND ord = 1
         GROUP BY title
         ORDER BY title",
    )?;
    let rows = stmt.query_map(params![yr], row_to_film_lead)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Actor Statistics ────────────────────────────────────────────────────────

/// Number of actors with no casting rows at all.
pub fn count_actors_with_no_roles(conn: &Connection) -> Result<BadActorCount, QueryError> {
    log::debug!("count_actors_with_no_roles()");
    // The LEFT OUTER JOIN keeps unmatched actors with NULL casting columns;
    // an inner join here would always count zero.
    let num_bad_actors: i64 = conn.query_row(
        "SELECT COUNT(actors.id) AS num_bad_actors
         FROM actors
           LEFT OUTER JOIN castings ON castings.actor_id = actors.id
         WHERE castings.actor_id IS NULL",
        [],
        |row| row.get(0),
    )?;
    Ok(BadActorCount { num_bad_actors })
}

/// Actors with exactly `count` lead roles, by name.
pub fn actors_with_exact_starring_count(
    conn: &Connection,
    count: i64,
) -> Result<Vec<CastMember>, QueryError> {
    if count < 0 {
        return Err(QueryError::InvalidParameter {
            name: "count",
            reason: format!("must not be negative, got {count}"),
        });
    }
    log::debug!("actors_with_exact_starring_count({count})");
    let mut stmt = conn.prepare(
        "SELECT name
         FROM actors
           JOIN castings ON castings.actor_id = actors.id
         WHERE ord = 1
         GROUP BY name
         HAVING COUNT(name) = ?1
         ORDER BY name",
    )?;
    let rows = stmt.query_map(params![count], |row| Ok(CastMember { name: row.get(0)? }))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn require_text(name: &'static str, value: &str) -> Result<(), QueryError> {
    if value.trim().is_empty() {
        return Err(QueryError::InvalidParameter {
            name,
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

fn row_to_film_title(row: &rusqlite::Row<'_>) -> rusqlite::Result<FilmTitle> {
    Ok(FilmTitle { title: row.get(0)? })
}

fn row_to_film_lead(row: &rusqlite::Row<'_>) -> rusqlite::Result<FilmLead> {
    Ok(FilmLead {
        title: row.get(0)?,
        name: row.get(1)?,
    })
}
