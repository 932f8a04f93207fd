//! MCP error types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON-RPC 2.0 error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const PARSE_ERROR: Self = Self(-32700);
    pub const INVALID_REQUEST: Self = Self(-32600);
    pub const METHOD_NOT_FOUND: Self = Self(-32601);
    pub const INVALID_PARAMS: Self = Self(-32602);
    pub const INTERNAL_ERROR: Self = Self(-32603);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// JSON-RPC 2.0 error, the shape every tool failure takes at the framework
/// boundary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JsonRpcError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Caller-caused failure: bad input, auth, permissions, not-found, rate limiting.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_REQUEST, message)
    }

    /// Anything not attributable to caller input.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INTERNAL_ERROR, message)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_invalid_request(&self) -> bool {
        self.code == ErrorCode::INVALID_REQUEST
    }

    pub fn is_internal_error(&self) -> bool {
        self.code == ErrorCode::INTERNAL_ERROR
    }
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code;
        let message = &self.message;
        write!(f, "[{code}] {message}")
    }
}

impl std::error::Error for JsonRpcError {}

pub type Result<T> = std::result::Result<T, JsonRpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code() {
        let err = JsonRpcError::invalid_request("Resource not found");
        assert_eq!(err.to_string(), "[-32600] Resource not found");
    }

    #[test]
    fn kind_predicates() {
        assert!(JsonRpcError::invalid_request("x").is_invalid_request());
        assert!(!JsonRpcError::invalid_request("x").is_internal_error());
        assert!(JsonRpcError::internal_error("x").is_internal_error());
    }

    #[test]
    fn serialize_error() {
        let err = JsonRpcError::internal_error("boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"code": -32603, "message": "boom"}));
    }

    #[test]
    fn deserialize_error_with_data() {
        let json = r#"{"code":-32602,"message":"bad","data":{"field":"name"}}"#;
        let err: JsonRpcError = serde_json::from_str(json).unwrap();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data.unwrap()["field"], "name");
    }
}
