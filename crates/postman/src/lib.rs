//! Postman API plumbing for MCP tools.
//!
//! This crate provides the shared base every Postman-backed tool builds on:
//! an authenticated HTTP client, a pre-request hook chain, translation of
//! HTTP failures into MCP errors, and the [`ToolHandler`] trait a dispatcher
//! talks to.
//!
//! # Overview
//!
//! - **PostmanClient**: reqwest client with the API key, JSON content type
//!   and a 30 second timeout. Failed requests come back as
//!   [`mcp::JsonRpcError`] with either an invalid-request or an
//!   internal-error code, never as transport errors.
//! - **RequestHook**: hooks run on every outgoing request in registration
//!   order (request logging first, then the optional `Accept` override).
//! - **ToolHandler**: tool definitions, tool calls and resource lookups.
//!   [`tool_mappings`] turns a handler into a name → handler map.
//!
//! # Example
//!
//! ```no_run
//! use postman::{ClientOptions, PostmanClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PostmanClient::provision(
//!     Some("PMAK-..."),
//!     None,
//!     ClientOptions::new().accept_header("application/vnd.api.v10+json"),
//! )?;
//!
//! let workspaces = client.get("/workspaces").await?;
//! println!("{workspaces}");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod errors;
mod middleware;
mod tool;

pub use client::{
    API_KEY_HEADER, ApiRequest, ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PostmanClient,
};
pub use error::{Error, Result};
pub use errors::{Failure, translate};
pub use middleware::{AcceptHeader, LogRequest, RequestHook};
pub use tool::{ToolHandler, ToolMapping, merge_mappings, tool_mappings};

// Re-export so implementors don't need a direct reqwest dependency.
pub use reqwest::{Method, Request};
