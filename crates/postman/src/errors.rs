//! Translation of HTTP failures into MCP errors.
//!
//! Every failed request is reported through [`translate`], so callers only
//! ever see [`JsonRpcError`] with one of two codes: `INVALID_REQUEST` for
//! client-caused failures and `INTERNAL_ERROR` for everything else.

use mcp::JsonRpcError;
use reqwest::StatusCode;
use serde_json::Value;

/// Fallback messages for statuses without a body-provided message.
const BAD_REQUEST: &str = "Bad request";
const UNPROCESSABLE: &str = "Invalid request parameters";
const UNAUTHORIZED: &str = "Unauthorized: invalid or missing API key";
const FORBIDDEN: &str = "Forbidden: insufficient permissions";
const NOT_FOUND: &str = "Resource not found";
const RATE_LIMITED: &str = "Rate limit exceeded";
const SERVER_ERROR: &str = "Internal server error";
const NO_RESPONSE: &str = "No response received from Postman API";

/// A request that did not produce a successful response.
#[derive(Debug)]
pub enum Failure {
    /// The server answered with a non-success status.
    Status {
        status: StatusCode,
        body: Option<Value>,
    },
    /// The request was sent but nothing came back (connect failure, timeout).
    NoResponse(reqwest::Error),
    /// The request was never dispatched.
    NotSent(String),
    /// A success response whose body could not be decoded.
    Decode(String),
}

impl Failure {
    /// Short diagnostic code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Status { status, .. } if status.is_client_error() => "ERR_BAD_REQUEST",
            Self::Status { .. } => "ERR_BAD_RESPONSE",
            Self::NoResponse(e) if e.is_timeout() => "ETIMEDOUT",
            Self::NoResponse(e) if e.is_connect() => "ERR_CONNECT",
            Self::NoResponse(_) => "ERR_NETWORK",
            Self::NotSent(_) => "ERR_REQUEST_SETUP",
            Self::Decode(_) => "ERR_BAD_RESPONSE_BODY",
        }
    }

    /// The `error.message` field of a Postman error body, if present.
    fn body_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                body: Some(body), ..
            } => body.pointer("/error/message").and_then(Value::as_str),
            _ => None,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { status, .. } => match self.body_message() {
                Some(message) => write!(f, "HTTP {}: {message}", status.as_u16()),
                None => write!(f, "HTTP {}", status.as_u16()),
            },
            Self::NoResponse(e) => write!(f, "{e}"),
            Self::NotSent(message) | Self::Decode(message) => f.write_str(message),
        }
    }
}

/// Log a failure and convert it into the error reported to the dispatcher.
pub fn translate(failure: &Failure) -> JsonRpcError {
    tracing::error!(code = failure.code(), "API error: {failure}");

    match failure {
        Failure::Status { status, .. } => {
            let body_message = failure.body_message();
            match status.as_u16() {
                400 => JsonRpcError::invalid_request(body_message.unwrap_or(BAD_REQUEST)),
                422 => JsonRpcError::invalid_request(body_message.unwrap_or(UNPROCESSABLE)),
                401 => JsonRpcError::invalid_request(UNAUTHORIZED),
                403 => JsonRpcError::invalid_request(FORBIDDEN),
                404 => JsonRpcError::invalid_request(NOT_FOUND),
                429 => JsonRpcError::invalid_request(RATE_LIMITED),
                _ => JsonRpcError::internal_error(body_message.unwrap_or(SERVER_ERROR)),
            }
        }
        Failure::NoResponse(_) => JsonRpcError::internal_error(NO_RESPONSE),
        Failure::NotSent(message) => {
            JsonRpcError::internal_error(format!("Error setting up request: {message}"))
        }
        Failure::Decode(message) => {
            JsonRpcError::internal_error(format!("Invalid response body: {message}"))
        }
    }
}
