//! MCP (Model Context Protocol) types shared by tool implementations.
//!
//! This crate holds the vocabulary a tool exchanges with the dispatcher:
//! tool definitions, resources, call results and the JSON-RPC error object
//! every failure is reported as.
//!
//! # Example
//!
//! ```
//! use mcp::{JsonRpcError, Tool};
//!
//! let tool = Tool::new("list_workspaces", serde_json::json!({"type": "object"}))
//!     .with_description("List all workspaces");
//! assert_eq!(tool.name, "list_workspaces");
//!
//! let err = JsonRpcError::invalid_request("Resource not found");
//! assert!(err.is_invalid_request());
//! ```

mod error;
mod protocol;

pub use error::{ErrorCode, JsonRpcError, Result};
pub use protocol::{CallToolResult, Resource, Tool, ToolContent};
