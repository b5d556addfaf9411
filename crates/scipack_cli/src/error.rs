//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;
use scipack_random::GeneratorError;

/// Errors surfaced by the `scipack` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Self-check failed: {0}")]
    CheckFailed(String),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
