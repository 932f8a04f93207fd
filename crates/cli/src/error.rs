//! CLI error types.

use crate::config::ConfigError;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration is invalid or missing required fields.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The client could not be provisioned.
    #[error(transparent)]
    Postman(#[from] postman::Error),

    /// The Postman API rejected or failed the request.
    #[error("request failed: {0}")]
    Request(#[from] mcp::JsonRpcError),

    /// A `--query` argument was not of the form `key=value`.
    #[error("invalid query parameter '{0}': expected key=value")]
    InvalidQuery(String),

    /// Logging could not be initialized.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
