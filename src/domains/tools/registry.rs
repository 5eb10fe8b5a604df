//! Tool Registry - the set of exposed tools and their dispatch.
//!
//! This module provides:
//! - The catalog filtered by [`ToolsConfig`]
//! - Tool metadata for listing
//! - Execution of a tool call against a [`ConfluenceApi`]

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::definitions::{self, common};
use super::endpoint::Endpoint;
use super::error::ToolError;
use crate::confluence::{ConfluenceApi, ConfluenceError};
use crate::core::config::ToolsConfig;

/// Tool registry - manages the exposed tools.
///
/// Cloning is cheap; clones share the API client.
#[derive(Clone)]
pub struct ToolRegistry {
    api: Arc<dyn ConfluenceApi>,
    endpoints: Vec<&'static Endpoint>,
}

impl ToolRegistry {
    /// Create a registry exposing the catalog entries allowed by `tools`.
    pub fn new(tools: &ToolsConfig, api: Arc<dyn ConfluenceApi>) -> Self {
        for name in &tools.include {
            if definitions::find(name).is_none() {
                warn!("MCP_TOOLS_INCLUDE names unknown tool '{}'", name);
            }
        }

        let endpoints: Vec<_> = definitions::all_endpoints()
            .filter(|endpoint| !tools.read_only || endpoint.is_read_only())
            .filter(|endpoint| {
                tools.include.is_empty() || tools.include.iter().any(|n| n == endpoint.name)
            })
            .filter(|endpoint| {
                tools.tags.is_empty() || tools.tags.iter().any(|t| endpoint.has_tag(t))
            })
            .collect();

        info!("Registered {} Confluence tools", endpoints.len());

        Self { api, endpoints }
    }

    /// Exposed endpoints, in catalog order.
    pub fn endpoints(&self) -> &[&'static Endpoint] {
        &self.endpoints
    }

    /// Shared API client.
    pub fn api(&self) -> Arc<dyn ConfluenceApi> {
        self.api.clone()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.endpoints.iter().map(|e| e.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both the HTTP transport and the rmcp router list tools from here.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.endpoints.iter().map(|e| e.to_tool()).collect()
    }

    /// Find an exposed endpoint by tool name.
    pub fn find(&self, name: &str) -> Option<&'static Endpoint> {
        self.endpoints.iter().copied().find(|e| e.name == name)
    }

    /// Dispatch a tool call by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(endpoint) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        execute(self.api.as_ref(), endpoint, arguments).await
    }
}

/// Run one tool call.
///
/// Invalid arguments are an `Err`; anything that happens once the request
/// is built (API errors included) is reported in the returned result.
pub async fn execute(
    api: &dyn ConfluenceApi,
    endpoint: &Endpoint,
    arguments: Option<&Map<String, Value>>,
) -> Result<CallToolResult, ToolError> {
    let request = endpoint.build_request(arguments)?;
    info!("Calling {}: {} {}", endpoint.name, request.method, request.path);
    debug!("Request: {:?}", request);

    let result = match api.send(request).await {
        Ok(response) => {
            debug!("{} returned {}", endpoint.name, response.status);
            common::success_result(response)
        }
        Err(ConfluenceError::HttpResponse { status, body }) => {
            common::api_error_result(status, &body)
        }
        Err(e) => common::error_result(&format!("{} failed: {}", endpoint.name, e)),
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::confluence::testing::RecordingApi;
    use crate::confluence::{ApiResponse, HttpMethod};

    fn registry_with(tools: ToolsConfig) -> (ToolRegistry, Arc<RecordingApi>) {
        let api = Arc::new(RecordingApi::new());
        (ToolRegistry::new(&tools, api.clone()), api)
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let (registry, _) = registry_with(ToolsConfig::default());
        let names = registry.tool_names();
        assert_eq!(names.len(), 187);
        assert!(names.contains(&"get_pages"));
        assert!(names.contains(&"create_page"));
        assert!(names.contains(&"get_space_by_id"));
        assert!(names.contains(&"delete_footer_comment"));
        assert!(names.contains(&"get_classification_levels"));
    }

    #[test]
    fn test_read_only_filter() {
        let (registry, _) = registry_with(ToolsConfig {
            read_only: true,
            ..Default::default()
        });
        assert!(!registry.endpoints().is_empty());
        assert!(registry
            .endpoints()
            .iter()
            .all(|e| e.method == HttpMethod::Get));
        assert!(registry.find("create_page").is_none());
    }

    #[test]
    fn test_include_filter() {
        let (registry, _) = registry_with(ToolsConfig {
            include: vec!["get_pages".into(), "get_page_by_id".into(), "bogus".into()],
            ..Default::default()
        });
        assert_eq!(registry.tool_names(), vec!["get_pages", "get_page_by_id"]);
    }

    #[test]
    fn test_tag_filter() {
        let (registry, _) = registry_with(ToolsConfig {
            tags: vec!["important".into()],
            ..Default::default()
        });
        assert!(registry.tool_names().contains(&"get_pages"));
        assert!(registry.endpoints().iter().all(|e| e.has_tag("important")));
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let (registry, _) = registry_with(ToolsConfig::default());
        let tools = registry.get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
    }

    #[tokio::test]
    async fn test_call_tool_sends_request() {
        let (registry, api) = registry_with(ToolsConfig::default());
        api.respond(Ok(ApiResponse::new(
            200,
            Some(json!({ "id": "42", "title": "Home" })),
        )));

        let result = registry
            .call_tool("get_page_by_id", Some(&args(json!({ "id": "42" }))))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(json!({ "id": "42", "title": "Home" }))
        );

        let request = api.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/pages/42");
    }

    #[tokio::test]
    async fn test_call_tool_api_error_is_result() {
        let (registry, api) = registry_with(ToolsConfig::default());
        api.respond(Err(ConfluenceError::HttpResponse {
            status: 404,
            body: r#"{"errors":[]}"#.to_string(),
        }));

        let result = registry
            .call_tool("get_page_by_id", Some(&args(json!({ "id": "missing" }))))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.structured_content,
            Some(json!({ "status": 404, "body": { "errors": [] } }))
        );
    }

    #[tokio::test]
    async fn test_call_tool_transport_failure_is_result() {
        let (registry, api) = registry_with(ToolsConfig::default());
        api.respond(Err(ConfluenceError::discovery("no accessible sites")));

        let result = registry.call_tool("get_spaces", None).await.unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_call_tool_invalid_arguments() {
        let (registry, api) = registry_with(ToolsConfig::default());
        let err = registry.call_tool("get_page_by_id", None).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_call_unknown_or_filtered_tool() {
        let (registry, _) = registry_with(ToolsConfig {
            read_only: true,
            ..Default::default()
        });
        let err = registry.call_tool("unknown", None).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));

        let err = registry.call_tool("delete_page", None).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }
}
