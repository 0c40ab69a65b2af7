//! Query service: one method per analytical question.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::connection::ConnectionManager;
use crate::models::*;
use crate::queries::{self, QueryError};

/// Read-only façade over a movie store.
///
/// Construct once and pass by reference to whatever issues queries. The
/// connection is closed when the service is dropped.
#[derive(Debug)]
pub struct MovieDatabase {
    manager: ConnectionManager,
}

impl MovieDatabase {
    /// Service for the store at `path`, opened on the first query.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            manager: ConnectionManager::new(path),
        }
    }

    /// Service over an already-open connection.
    pub fn with_connection(conn: Connection) -> Self {
        Self {
            manager: ConnectionManager::from_connection(conn),
        }
    }

    pub fn manager(&self) -> &ConnectionManager {
        &self.manager
    }

    pub fn films_with_actor(&self, name: &str) -> Result<Vec<FilmTitle>, QueryError> {
        queries::films_with_actor(self.manager.connection()?, name)
    }

    pub fn cast_list_for_movie(&self, title: &str) -> Result<Vec<CastMember>, QueryError> {
        queries::cast_list_for_movie(self.manager.connection()?, title)
    }

    pub fn busiest_years_for_actor(&self, name: &str) -> Result<Vec<YearCount>, QueryError> {
        queries::busiest_years_for_actor(self.manager.connection()?, name)
    }

    pub fn non_starring_films(&self, name: &str) -> Result<Vec<FilmTitle>, QueryError> {
        queries::non_starring_films(self.manager.connection()?, name)
    }

    pub fn lead_actors_for_year(&self, yr: i32) -> Result<Vec<FilmLead>, QueryError> {
        queries::lead_actors_for_year(self.manager.connection()?, yr)
    }

    pub fn count_actors_with_no_roles(&self) -> Result<BadActorCount, QueryError> {
        queries::count_actors_with_no_roles(self.manager.connection()?)
    }

    pub fn actors_with_exact_starring_count(
        &self,
        count: i64,
    ) -> Result<Vec<CastMember>, QueryError> {
        queries::actors_with_exact_starring_count(self.manager.connection()?, count)
    }

    /// Row order is unspecified for this query.
    pub fn lead_co_stars_of(&self, name: &str) -> Result<Vec<FilmLead>, QueryError> {
        queries::lead_co_stars_of(self.manager.connection()?, name)
    }
}
