//! Error handling for the dashboard

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but is not valid JSON for [`crate::config::Config`].
    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Static data could not be encoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No home directory to place the default config file in.
    #[error("Could not determine the home directory; pass --config <PATH>")]
    NoHomeDir,

    /// `init-config` was asked to write over an existing file.
    #[error("Config file {} already exists; use --force to overwrite", .0.display())]
    ConfigExists(PathBuf),

    /// The interactive dashboard needs a terminal to draw on.
    #[error("Standard output is not a terminal; use `bondemala summary` for plain output")]
    NotATerminal,

    #[error("Logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}
