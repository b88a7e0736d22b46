//! Common utilities shared across the Waitlister tools.
//!
//! Argument parsing, email validation, and the mapping from API outcomes to
//! tool results.

use std::collections::HashMap;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::domains::waitlist::{ApiRequest, WaitlistClient, WaitlistError};

/// Opaque string-to-string metadata passed through to Waitlister.
pub type Metadata = HashMap<String, String>;

/// Deserialize tool arguments into a typed params struct.
pub fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Syntactic email check.
///
/// Local part: unquoted `A-Za-z0-9._%+'-`, no leading, trailing or doubled
/// dot. Domain: dot-separated labels of alphanumerics and hyphens, no label
/// starting or ending with `-`, and an alphabetic TLD of at least 2 letters.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+'-".contains(c))
}

fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };

    labels.len() >= 2
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Convert metadata into a JSON object.
pub fn metadata_object(metadata: Metadata) -> Map<String, Value> {
    metadata
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect()
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result holding the pretty-printed JSON body.
pub fn json_result(value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            error_result(&format!("Failed to serialize response: {}", e))
        }
    }
}

/// Send a request and turn the outcome into a tool result.
pub async fn send_request(client: &WaitlistClient, request: ApiRequest) -> CallToolResult {
    match client.send(request).await {
        Ok(value) => json_result(&value),
        Err(e @ WaitlistError::Api { .. }) => {
            warn!("Waitlister rejected the request: {}", e);
            error_result(&e.to_string())
        }
        Err(e) => {
            error!("Waitlister request failed: {}", e);
            error_result(&e.to_string())
        }
    }
}

/// Text of the first content block.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}
