//! Database location settings.
//!
//! The settings file is `~/.config/movie-sql/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/data/movie.db"
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the saved database path.
pub(crate) const DB_ENV_VAR: &str = "MOVIE_SQL_DB";

/// Database file used when nothing else is configured.
pub(crate) const DEFAULT_DB_FILE: &str = "movie.db";

/// Where the resolved database path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DbSource {
    /// The `--db` flag.
    Flag,
    /// The `MOVIE_SQL_DB` environment variable.
    EnvVar,
    /// `database.path` in settings.toml.
    SettingsFile,
    /// `movie.db` in the current directory.
    Default,
}

impl std::fmt::Display for DbSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--db flag"),
            Self::EnvVar => write!(f, "env ${}", DB_ENV_VAR),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Canonical path to the settings file: `~/.config/movie-sql/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movie-sql").join("settings.toml")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `$MOVIE_SQL_DB`
/// 3. Saved `database.path` in `settings.toml`
/// 4. `movie.db` in the current directory
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> (PathBuf, DbSource) {
    let env = std::env::var(DB_ENV_VAR).ok();
    let saved = std::fs::read_to_string(settings_path())
        .ok()
        .and_then(|contents| db_path_from_toml(&contents));
    choose_db_path(cli_override, env, saved)
}

fn choose_db_path(
    cli_override: Option<PathBuf>,
    env: Option<String>,
    saved: Option<PathBuf>,
) -> (PathBuf, DbSource) {
    if let Some(p) = cli_override {
        return (p, DbSource::Flag);
    }
    if let Some(p) = env.filter(|v| !v.is_empty()) {
        return (PathBuf::from(p), DbSource::EnvVar);
    }
    if let Some(p) = saved {
        return (p, DbSource::SettingsFile);
    }
    (PathBuf::from(DEFAULT_DB_FILE), DbSource::Default)
}

/// Read `database.path` from settings TOML, if set.
fn db_path_from_toml(contents: &str) -> Option<PathBuf> {
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Set or remove `database.path`, leaving every other key alone.
fn update_db_path(doc: &mut toml::Value, path: Option<&Path>) -> io::Result<()> {
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }
    Ok(())
}

/// Save (or clear) the database path in `settings.toml`.
pub(crate) fn save_db_path(path: Option<&Path>) -> io::Result<()> {
    save_db_path_to(&settings_path(), path)
}

fn save_db_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        // Refuse to overwrite a file we cannot read back; its keys would be lost.
        contents.parse::<toml::Value>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} is not valid TOML: {}", settings.display(), e),
            )
        })?
    } else {
        toml::Value::Table(Default::default())
    };

    update_db_path(&mut doc, path)?;

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}
