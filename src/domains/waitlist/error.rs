//! Waitlister API error types.

use thiserror::Error;

/// Errors raised while talking to the Waitlister API.
#[derive(Debug, Error)]
pub enum WaitlistError {
    /// The API answered with a non-success status.
    ///
    /// The display text is the API-provided message, or
    /// `API error: <status> <reason>` when the body carries none.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A caller-supplied header was not a valid HTTP header.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl WaitlistError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create an invalid header error.
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        Self::InvalidHeader(msg.into())
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
