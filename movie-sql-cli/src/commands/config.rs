use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{resolve_db_path, save_db_path, settings_path};
use crate::CliError;

/// Show the resolved database path and its source.
pub(crate) fn run_config_show(db_override: Option<PathBuf>) {
    let (db_path, source) = resolve_db_path(db_override);
    let settings = settings_path();

    log::info!(
        "{}",
        "movie-sql Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    log::info!(
        "  Settings file: {} {}",
        settings.display().if_supports_color(Stdout, |t| t.cyan()),
        exists_tag(&settings),
    );
    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        exists_tag(&db_path),
    );
    log::info!(
        "  Source:        {}",
        source.if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Save (or clear) the database path in the settings file.
pub(crate) fn run_config_set_db(path: Option<&Path>) -> Result<(), CliError> {
    let stored = match path {
        Some(p) => Some(std::path::absolute(p)?),
        None => None,
    };
    save_db_path(stored.as_deref())
        .map_err(|e| CliError::config(format!("Failed to write settings: {}", e)))?;

    match &stored {
        Some(p) => log::info!(
            "{} database path to {}",
            "Saved".if_supports_color(Stdout, |t| t.green()),
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{} saved database path",
            "Cleared".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    Ok(())
}

fn exists_tag(path: &Path) -> String {
    if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    }
}
