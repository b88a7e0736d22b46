//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; they all share one
//! [`WaitlistClient`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::waitlist::WaitlistClient;

use super::definitions::{
    AddSubscriberTool, GetSubscriberTool, ListSubscribersTool, LogViewTool, UpdateSubscriberTool,
};

/// Names of all registered tools.
pub fn tool_names() -> [&'static str; 5] {
    [
        AddSubscriberTool::NAME,
        ListSubscribersTool::NAME,
        GetSubscriberTool::NAME,
        UpdateSubscriberTool::NAME,
        LogViewTool::NAME,
    ]
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<WaitlistClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddSubscriberTool::create_route(client.clone()))
        .with_route(ListSubscribersTool::create_route(client.clone()))
        .with_route(GetSubscriberTool::create_route(client.clone()))
        .with_route(UpdateSubscriberTool::create_route(client.clone()))
        .with_route(LogViewTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CredentialsConfig, WaitlisterConfig};

    struct TestServer {}

    fn test_client() -> Arc<WaitlistClient> {
        let config = WaitlisterConfig::new(CredentialsConfig::new("k", "w"));
        Arc::new(WaitlistClient::new(&config).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        for name in tool_names() {
            assert!(names.contains(&name), "missing tool {}", name);
        }
    }

    #[test]
    fn test_every_tool_has_description_and_object_schema() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema is not an object",
                tool.name
            );
        }
    }
}
