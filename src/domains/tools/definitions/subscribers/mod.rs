//! Subscriber tools.
//!
//! - `add`: sign a subscriber up (`POST /sign-up`)
//! - `list`: page through subscribers (`GET /subscribers`)
//! - `get`: fetch one subscriber (`GET /subscribers/{id_or_email}`)
//! - `update`: partial update (`PUT /subscribers/{id_or_email}`)

pub mod add;
pub mod get;
pub mod list;
pub mod update;

pub use add::{AddSubscriberParams, AddSubscriberTool};
pub use get::{GetSubscriberParams, GetSubscriberTool};
pub use list::{ListSubscribersParams, ListSubscribersTool, SortBy, SortDir};
pub use update::{UpdateSubscriberParams, UpdateSubscriberTool};
