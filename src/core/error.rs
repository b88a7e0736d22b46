//! Error types and handling for the MCP server.
//!
//! Only two things can stop the server before it serves: bad configuration
//! and a Waitlister client that cannot be built. Per-call failures never
//! surface here; tools turn them into error results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Waitlister API client.
    #[error("Waitlist error: {0}")]
    Waitlist(#[from] crate::domains::waitlist::WaitlistError),

    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
