//! Waitlister API domain.
//!
//! Everything needed to turn a shaped [`ApiRequest`] into an authenticated
//! call against `https://waitlister.me/api/v1/waitlist/{waitlist_key}` and
//! to normalize what comes back.

mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{API_KEY_HEADER, WaitlistClient};
pub use error::WaitlistError;
pub use request::ApiRequest;
