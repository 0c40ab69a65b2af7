//! Entity and result-row types.
//!
//! Each query returns a fixed-shape record; the field names match the
//! column names the SQL selects.

use serde::{Deserialize, Serialize};

// ── Entities ────────────────────────────────────────────────────────────────

/// A row of the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub yr: i32,
}

/// A row of the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
}

/// A row of the `castings` table. `ord = 1` is the lead role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casting {
    pub movie_id: i64,
    pub actor_id: i64,
    pub ord: i32,
}

// ── Query Records ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmTitle {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMember {
    pub name: String,
}

/// Number of films an actor appeared in during one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub yr: i32,
    pub count: i64,
}

/// A film paired with its lead actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmLead {
    pub title: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadActorCount {
    pub num_bad_actors: i64,
}
