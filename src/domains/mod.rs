//! Domains module containing business logic organized by bounded contexts.
//!
//! - **waitlist**: HTTP client adapter for the Waitlister REST API
//! - **tools**: MCP tools translating calls into Waitlister requests

pub mod tools;
pub mod waitlist;
