//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are described as data in `domains/tools/definitions/`, one file per
//! Confluence API group. The [`ToolRegistry`] filters the catalog and owns
//! the API client; the ToolRouter is built from it in
//! `domains/tools/router.rs`. **Adding a tool does NOT require modifying
//! this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use serde_json::{Value, json};
use std::sync::Arc;

use super::config::Config;
use super::error::{self, Error};
use crate::confluence::{ConfluenceApi, ConfluenceClient};
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Tools for the Confluence Cloud REST API v2. Each tool performs one \
    API call against the configured site (pages, blog posts, spaces, comments, attachments, \
    labels, custom content, whiteboards, databases, folders, smart links, tasks, users and \
    classification levels). Results are the raw API JSON; paginate with the `cursor` found in \
    the returned `_links.next` URL.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the Confluence API.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Exposed tools and the API client they share.
    registry: ToolRegistry,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to Confluence over HTTPS.
    pub fn new(config: Config) -> error::Result<Self> {
        let client = ConfluenceClient::new(&config.confluence)?;
        Self::with_api(config, Arc::new(client))
    }

    /// Create a server on top of any [`ConfluenceApi`] implementation.
    pub fn with_api(config: Config, api: Arc<dyn ConfluenceApi>) -> error::Result<Self> {
        let config = Arc::new(config);
        let registry = ToolRegistry::new(&config.tools, api);

        if registry.endpoints().is_empty() {
            return Err(Error::config(
                "No tools left after applying MCP_TOOLS_READ_ONLY / MCP_TOOLS_INCLUDE / MCP_TOOLS_TAGS",
            ));
        }

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry),
            config,
            registry,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Usage notes sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Value> {
        self.registry
            .get_all_tools()
            .into_iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": t.annotations
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// `arguments` must be a JSON object or `null`. The value returned is
    /// the serialized `CallToolResult`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> error::Result<Value> {
        let arguments = match arguments {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {}",
                    other
                ))
                .into());
            }
        };

        let result = self.registry.call_tool(name, arguments.as_ref()).await?;
        Ok(serde_json::to_value(result)?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confluence::ApiResponse;
    use crate::confluence::testing::RecordingApi;
    use crate::core::config::ToolsConfig;

    fn server_with(config: Config) -> (McpServer, Arc<RecordingApi>) {
        let api = Arc::new(RecordingApi::new());
        let server = McpServer::with_api(config, api.clone()).unwrap();
        (server, api)
    }

    #[test]
    fn test_server_lists_all_tools() {
        let (server, _) = server_with(Config::default());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 187);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
        assert_eq!(server.name(), "confluence-mcp-server");
    }

    #[test]
    fn test_empty_tool_set_is_config_error() {
        let config = Config {
            tools: ToolsConfig {
                include: vec!["nothing_matches".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let err = McpServer::with_api(config, Arc::new(RecordingApi::new())).err();
        assert!(matches!(err, Some(Error::Config(_))));
    }

    #[test]
    fn test_get_info_enables_tools_only() {
        let (server, _) = server_with(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[tokio::test]
    async fn test_call_tool_returns_serialized_result() {
        let (server, api) = server_with(Config::default());
        api.respond(Ok(ApiResponse::new(200, Some(json!({ "results": [] })))));

        let result = server
            .call_tool("get_spaces", json!({ "limit": 1 }))
            .await
            .unwrap();

        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"], json!({ "results": [] }));
        assert_eq!(
            api.last_request().query,
            vec![("limit".to_string(), "1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_call_tool_rejects_non_object_arguments() {
        let (server, api) = server_with(Config::default());
        let err = server.call_tool("get_spaces", json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, Error::Tool(ToolError::InvalidArguments(_))));
        assert!(api.requests().is_empty());
    }

    /// Serve the handler on one end of an in-memory pipe and connect an
    /// rmcp client to the other.
    async fn connect(server: McpServer) -> rmcp::service::RunningService<rmcp::RoleClient, ()> {
        use rmcp::ServiceExt;

        let (server_io, client_io) = tokio::io::duplex(64 * 1024);
        tokio::spawn(async move {
            if let Ok(service) = server.serve(server_io).await {
                let _ = service.waiting().await;
            }
        });
        ().serve(client_io).await.unwrap()
    }

    fn call(name: &'static str, arguments: Value) -> CallToolRequestParam {
        CallToolRequestParam {
            name: name.into(),
            arguments: arguments.as_object().cloned(),
        }
    }

    #[tokio::test]
    async fn test_session_lists_and_calls_tools() {
        let (server, api) = server_with(Config::default());
        api.respond(Ok(ApiResponse::new(200, Some(json!({ "id": "9", "title": "Home" })))));
        let client = connect(server).await;

        let tools = client.list_all_tools().await.unwrap();
        assert_eq!(tools.len(), 187);

        let result = client
            .call_tool(call("get_page_by_id", json!({ "id": 9, "body_format": "storage" })))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(json!({ "id": "9", "title": "Home" }))
        );

        let request = api.last_request();
        assert_eq!(request.path, "/pages/9");
        assert!(
            request
                .query
                .contains(&("body-format".to_string(), "storage".to_string()))
        );

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_session_missing_argument_is_invalid_params() {
        let (server, api) = server_with(Config::default());
        let client = connect(server).await;

        let err = client
            .call_tool(call("get_page_by_id", json!({})))
            .await
            .unwrap_err();
        match err {
            rmcp::ServiceError::McpError(e) => {
                assert_eq!(e.code, ErrorCode::INVALID_PARAMS);
                assert!(e.message.contains("'id'"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(api.requests().is_empty());

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_session_remote_failure_is_error_result() {
        let (server, api) = server_with(Config::default());
        api.respond(Err(crate::confluence::ConfluenceError::HttpResponse {
            status: 404,
            body: r#"{"errors":[{"title":"Not Found"}]}"#.to_string(),
        }));
        let client = connect(server).await;

        let result = client
            .call_tool(call("delete_page", json!({ "id": "5" })))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(api.last_request().method, crate::confluence::HttpMethod::Delete);

        client.cancel().await.unwrap();
    }
}
