use thiserror::Error;

/// Errors raised while provisioning a client.
///
/// Request-time failures never surface as this type; they are translated
/// into [`mcp::JsonRpcError`] instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
