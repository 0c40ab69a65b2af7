//! YAML datasets for building a movie store.
//!
//! ```yaml
//! movies:
//!   - { id: 1, title: Zombies of the Stratosphere, yr: 1952 }
//! actors:
//!   - { id: 1, name: Leonard Nimoy }
//! castings:
//!   - { movie_id: 1, actor_id: 1, ord: 1 }
//! ```

use std::path::Path;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::models::{Actor, Casting, Movie};
use crate::operations::{insert_actor, insert_casting, insert_movie, OperationError};

/// The full contents of a movie store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub castings: Vec<Casting>,
}

/// Row counts written by [`load_dataset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub movies: usize,
    pub actors: usize,
    pub castings: usize,
}

impl Dataset {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, OperationError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Read and parse a YAML dataset file.
    pub fn load(path: &Path) -> Result<Self, OperationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

/// Insert every row of `dataset`. Movies and actors go in before castings.
pub fn load_dataset(conn: &Connection, dataset: &Dataset) -> Result<LoadStats, OperationError> {
    let mut stats = LoadStats::default();

    for movie in &dataset.movies {
        insert_movie(conn, movie)?;
        stats.movies += 1;
    }
    for actor in &dataset.actors {
        insert_actor(conn, actor)?;
        stats.actors += 1;
    }
    for casting in &dataset.castings {
        insert_casting(conn, casting)?;
        stats.castings += 1;
    }

    log::debug!(
        "Loaded {} movies, {} actors, {} castings",
        stats.movies,
        stats.actors,
        stats.castings
    );
    Ok(stats)
}
