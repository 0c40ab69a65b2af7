//! Console logger behind the `log` facade.
//!
//! `info` lines go to stdout; `warn`, `error` and `debug` go to stderr.
//! With `--logfile`, every emitted line is also appended to the file with
//! ANSI color codes removed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    file: Option<Mutex<File>>,
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        // Timestamps stay off stdout so `--json` output remains parseable.
        let prefix = if self.timestamps && writes_to_stderr(record.level()) {
            format!("{} ", chrono::Local::now().format("%H:%M:%S%.3f"))
        } else {
            String::new()
        };

        let line = match record.level() {
            Level::Error => format!(
                "{prefix}{} {message}",
                "error:".if_supports_color(Stderr, |t| t.red()),
            ),
            Level::Warn => format!(
                "{prefix}{} {message}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
            ),
            Level::Info => format!("{prefix}{message}"),
            Level::Debug | Level::Trace => format!(
                "{prefix}{}",
                message.if_supports_color(Stderr, |t| t.dimmed()),
            ),
        };

        if writes_to_stderr(record.level()) {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Only `info` lines are command output.
fn writes_to_stderr(level: Level) -> bool {
    level != Level::Info
}

/// Pick the level for the `--quiet` / `--verbose` flags. Quiet wins.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. Call once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let file = match logfile {
        Some(path) => Some(Mutex::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    let level = level_for(quiet, verbose);
    let logger = CliLogger {
        level,
        timestamps: verbose && !quiet,
        file,
    };

    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| CliError::config(format!("Failed to install logger: {}", e)))?;
    log::set_max_level(level);
    Ok(())
}

/// Emit an empty info line (keeps blank lines in the log file too).
pub(crate) fn log_blank() {
    log::info!("");
}
