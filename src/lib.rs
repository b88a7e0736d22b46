//! Waitlister MCP Server Library
//!
//! Exposes Waitlister waitlist management (add, list, get and update
//! subscribers, log page views) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **waitlist**: authenticated HTTP client for the Waitlister REST API
//!   - **tools**: one MCP tool per Waitlister operation
//!
//! # Example
//!
//! ```rust,no_run
//! use waitlister_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
