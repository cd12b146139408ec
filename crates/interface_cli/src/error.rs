//! CLI errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rating a profile from the command line
#[derive(Debug, Error)]
pub enum CliError {
    /// Profile file could not be read
    #[error("Failed to read profile from {path}: {source}")]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile JSON is malformed or missing fields
    #[error("Invalid driver profile: {0}")]
    InvalidProfile(#[source] serde_json::Error),

    /// Premium could not be rendered as JSON
    #[error("Failed to render premium: {0}")]
    Render(#[source] serde_json::Error),

    /// `RATING_*` environment configuration is invalid
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// Writing the output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
