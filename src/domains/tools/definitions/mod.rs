//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod analytics;
pub mod common;
pub mod subscribers;

pub use analytics::{LogViewParams, LogViewTool};
pub use subscribers::{
    AddSubscriberParams, AddSubscriberTool, GetSubscriberParams, GetSubscriberTool,
    ListSubscribersParams, ListSubscribersTool, SortBy, SortDir, UpdateSubscriberParams,
    UpdateSubscriberTool,
};
