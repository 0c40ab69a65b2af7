use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or queried
    #[error("Database error: {0}")]
    Database(String),

    /// Dataset file could not be read or loaded
    #[error("Load error: {0}")]
    Load(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Output formatting error
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}
