//! Tools domain module.
//!
//! Every tool is a stateless translator from one validated MCP tool call to
//! one Waitlister API request.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `build_request()`,
//!    `call()`, `to_tool()` and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::{build_tool_router, tool_names};
