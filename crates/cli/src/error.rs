//! CLI error type.

use bookmarket_client::{ApiError, ConfigError};
use bookmarket_core::{AmountError, TelephoneError};
use thiserror::Error;

/// Errors that can end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid telephone: {0}")]
    Telephone(#[from] TelephoneError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
