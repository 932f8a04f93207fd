//! Tool handler trait.

use async_trait::async_trait;
use mcp::{CallToolResult, JsonRpcError, Resource, Tool};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps tool names to the handler responsible for them.
pub type ToolMapping = HashMap<String, Arc<dyn ToolHandler>>;

/// A group of tools backed by the Postman API.
///
/// Implementations usually hold a [`PostmanClient`](crate::PostmanClient)
/// and expose one or more tools through [`tool_definitions`].
/// Resource hooks default to "no resources".
///
/// [`tool_definitions`]: ToolHandler::tool_definitions
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Tools this handler serves.
    fn tool_definitions(&self) -> Vec<Tool>;

    /// Execute the tool called `name`.
    async fn handle_tool_call(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<CallToolResult, JsonRpcError>;

    async fn list_tool_resources(&self) -> Result<Vec<Resource>, JsonRpcError> {
        Ok(Vec::new())
    }

    async fn get_tool_resource_details(&self, uri: &str) -> Result<Resource, JsonRpcError> {
        Err(JsonRpcError::invalid_request(format!("Resource not found: {uri}")))
    }

    /// Whether [`get_tool_resource_details`] resolves `uri`.
    ///
    /// Any failure counts as "cannot handle", including transient network
    /// errors.
    ///
    /// [`get_tool_resource_details`]: ToolHandler::get_tool_resource_details
    async fn can_handle_resource(&self, uri: &str) -> bool {
        self.get_tool_resource_details(uri).await.is_ok()
    }
}

/// Map every tool `handler` defines to `handler`.
///
/// Duplicate names are not rejected; the last definition wins.
pub fn tool_mappings(handler: &Arc<dyn ToolHandler>) -> ToolMapping {
    handler
        .tool_definitions()
        .into_iter()
        .map(|tool| (tool.name, Arc::clone(handler)))
        .collect()
}

/// Fold the mappings of several handlers, later handlers overwriting earlier ones.
pub fn merge_mappings<'a>(
    handlers: impl IntoIterator<Item = &'a Arc<dyn ToolHandler>>,
) -> ToolMapping {
    let mut mapping = ToolMapping::new();
    for handler in handlers {
        mapping.extend(tool_mappings(handler));
    }
    mapping
}
