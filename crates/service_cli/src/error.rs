//! CLI error types.

use crate::config::ConfigError;
use lehmer_core::LehmerError;
use thiserror::Error;

/// Errors surfaced by `lehmer` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lab error: {0}")]
    Lehmer(#[from] LehmerError),

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
