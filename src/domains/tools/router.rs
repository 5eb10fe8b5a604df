//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every exposed endpoint becomes one dynamic route; the route closure
//! shares the registry's API client.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::{ToolRegistry, execute};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .endpoints()
        .iter()
        .copied()
        .fold(ToolRouter::new(), |router, endpoint| {
            let api = registry.api();
            router.with_route(ToolRoute::new_dyn(
                endpoint.to_tool(),
                move |ctx: ToolCallContext<'_, S>| {
                    let api = api.clone();
                    let args = ctx.arguments.clone();
                    async move {
                        execute(api.as_ref(), endpoint, args.as_ref())
                            .await
                            .map_err(McpError::from)
                    }
                    .boxed()
                },
            ))
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::confluence::testing::RecordingApi;
    use crate::core::config::ToolsConfig;

    struct TestServer {}

    fn registry(tools: ToolsConfig) -> ToolRegistry {
        ToolRegistry::new(&tools, Arc::new(RecordingApi::new()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(&registry(ToolsConfig::default()));
        let tools = router.list_all();
        assert_eq!(tools.len(), 187);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_pages"));
        assert!(names.contains(&"update_page"));
        assert!(names.contains(&"delete_space_property_by_id"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = registry(ToolsConfig {
            read_only: true,
            ..Default::default()
        });
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
