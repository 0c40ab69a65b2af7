use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_sql_db::{create_database, load_dataset, Dataset, LoadStats};

use crate::settings::resolve_db_path;
use crate::CliError;

pub(crate) fn run_load(
    dataset_path: &Path,
    db_path: Option<PathBuf>,
    force: bool,
) -> Result<(), CliError> {
    let (db_path, source) = resolve_db_path(db_path);
    log::debug!("Load target {} ({})", db_path.display(), source);

    if db_path.exists() && !force {
        return Err(CliError::load(format!(
            "{} already exists (use --force to replace it)",
            db_path.display()
        )));
    }

    let dataset = Dataset::load(dataset_path).map_err(|e| {
        CliError::load(format!("Failed to read {}: {}", dataset_path.display(), e))
    })?;

    // Build next to the target and swap it in only once every row is written.
    let tmp = db_path.with_extension("db.tmp");
    if tmp.exists() {
        std::fs::remove_file(&tmp)?;
    }
    let stats = match build_store(&tmp, &dataset) {
        Ok(stats) => stats,
        Err(e) => {
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }
    };

    if db_path.exists() {
        log::warn!("Replacing existing database {}", db_path.display());
    }
    std::fs::rename(&tmp, &db_path)?;

    log::info!(
        "{} {}",
        "Created".if_supports_color(Stdout, |t| t.green()),
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  Movies:    {:>8}", stats.movies);
    log::info!("  Actors:    {:>8}", stats.actors);
    log::info!("  Castings:  {:>8}", stats.castings);

    Ok(())
}

fn build_store(path: &Path, dataset: &Dataset) -> Result<LoadStats, CliError> {
    let conn = create_database(path)
        .map_err(|e| CliError::database(format!("Failed to create database: {}", e)))?;
    load_dataset(&conn, dataset)
        .map_err(|e| CliError::load(format!("Failed to load dataset: {}", e)))
}
