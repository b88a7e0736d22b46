//! STDIO transport, the mode MCP hosts launch the Waitlister server in.
//!
//! The host owns both pipes: stdout carries only JSON-RPC frames, so every
//! tracing line must go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve the five Waitlister tools to the host until it closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Waitlister tools ready on stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
