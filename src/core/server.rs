//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are dispatched by the rmcp `ToolRouter` built in
//! `domains/tools/router.rs`; adding a tool does not touch this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::{tools::build_tool_router, waitlist::WaitlistClient};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared Waitlister client.
    client: Arc<WaitlistClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let client = WaitlistClient::new(&config.waitlister)?;
        Ok(Self::with_client(config, client))
    }

    /// Create a server around an existing client.
    pub fn with_client(config: Config, client: WaitlistClient) -> Self {
        let client = Arc::new(client);
        let tool_router = build_tool_router::<Self>(client.clone());

        info!("Registered {} tools", tool_router.list_all().len());

        Self {
            config: Arc::new(config),
            client,
            tool_router,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared Waitlister client.
    pub fn client(&self) -> &Arc<WaitlistClient> {
        &self.client
    }

    /// Metadata of all registered tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Manage a Waitlister waitlist: add_subscriber, list_subscribers, \
                 get_subscriber, update_subscriber and log_view. Results are the raw \
                 Waitlister JSON responses."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
