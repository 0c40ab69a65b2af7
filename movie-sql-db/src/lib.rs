//! SQLite query layer for a movies / actors / castings database.
//!
//! Provides the schema, a lazily opened connection, and a fixed set of
//! analytical queries backed by SQLite (via rusqlite with bundled feature).

pub mod connection;
pub mod dataset;
pub mod models;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod service;

pub use connection::ConnectionManager;
pub use dataset::{load_dataset, Dataset, LoadStats};
pub use models::{Actor, BadActorCount, CastMember, Casting, FilmLead, FilmTitle, Movie, YearCount};
pub use operations::{insert_actor, insert_casting, insert_movie, OperationError};
pub use queries::{
    actors_with_exact_starring_count, busiest_years_for_actor, cast_list_for_movie,
    count_actors_with_no_roles, films_with_actor, lead_actors_for_year, lead_co_stars_of,
    non_starring_films, QueryError,
};
pub use schema::{create_database, create_schema, open_database, open_memory, SchemaError};
pub use service::MovieDatabase;
