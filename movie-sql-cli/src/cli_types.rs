//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "movie-sql")]
#[command(about = "Ask questions of a movies / actors / castings database", long_about = None)]
pub(crate) struct Cli {
    /// Path to the movie database (overrides $MOVIE_SQL_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print rows as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Films an actor appeared in
    Films {
        /// Actor name, e.g. "Chuck Norris"
        actor: String,
    },

    /// Distinct cast list of a film
    Cast {
        /// Film title, e.g. "Zombies of the Stratosphere"
        title: String,
    },

    /// Years in which an actor appeared in more than two films
    BusyYears {
        /// Actor name, e.g. "Danny DeVito"
        actor: String,
    },

    /// Films where an actor appeared but not in the lead role
    Supporting {
        /// Actor name, e.g. "Nicolas Cage"
        actor: String,
    },

    /// Each film of a year with its lead actor
    Leads {
        /// Release year, e.g. 1908
        year: i32,
    },

    /// Count actors that have no roles at all
    BadActors,

    /// Actors with exactly this many lead roles
    Starring {
        /// Number of lead roles
        #[arg(default_value_t = 20)]
        count: i64,
    },

    /// The lead actor of every film an actor appeared in
    CoStars {
        /// Actor name, e.g. "Chris Farley"
        actor: String,
    },

    /// Create a database from a YAML dataset
    Load {
        /// YAML file with movies, actors and castings
        dataset: PathBuf,

        /// Replace the target database if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Show or change where the database lives
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved database path and where it came from
    Show,

    /// Print the settings file path
    Path,

    /// Save a database path in settings.toml
    SetDb {
        /// Database path to remember
        path: PathBuf,
    },

    /// Remove the saved database path
    ClearDb,
}
