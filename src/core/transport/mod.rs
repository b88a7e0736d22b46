//! How MCP clients reach the Waitlister tools.
//!
//! - **STDIO** (feature `stdio`, default): one session with the launching host.
//! - **TCP** (feature `tcp`): one session per accepted connection, all sharing
//!   a single Waitlister client.
//!
//! Transports only own connections. Tool dispatch stays in `McpServer`.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
