//! List subscribers tool.
//!
//! Pages through the waitlist with sorting.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{parse_params, send_request};
use crate::domains::waitlist::{ApiRequest, WaitlistClient};

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Sort key for the subscriber listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Position,
    Points,
    #[default]
    Date,
    ReferralCount,
    Email,
}

/// Sort direction for the subscriber listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

/// Parameters for listing subscribers. Serialized as-is into the query string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListSubscribersParams {
    #[schemars(range(min = 1, max = 100), description = "Results per page (1-100, default: 20)")]
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[schemars(range(min = 1), description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    #[schemars(description = "Field to sort by (default: date)")]
    #[serde(default)]
    pub sort_by: SortBy,

    #[schemars(description = "Sort direction (default: desc)")]
    #[serde(default)]
    pub sort_dir: SortDir,
}

fn default_limit() -> u32 {
    20
}

fn default_page() -> u32 {
    1
}

/// List subscribers tool - `GET /subscribers`.
pub struct ListSubscribersTool;

impl ListSubscribersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_subscribers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List waitlist subscribers with pagination and sorting. \
         Sort by position, points, date, referral_count, or email. \
         Returns a page of subscribers plus pagination info.";

    /// Validate ranges and build the listing request.
    pub fn build_request(params: ListSubscribersParams) -> Result<ApiRequest, ToolError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&params.limit) {
            return Err(ToolError::invalid_arguments(format!(
                "limit must be between {} and {}, got {}",
                MIN_LIMIT, MAX_LIMIT, params.limit
            )));
        }
        if params.page < 1 {
            return Err(ToolError::invalid_arguments(format!(
                "page must be at least 1, got {}",
                params.page
            )));
        }

        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| ToolError::internal(format!("Failed to encode query: {}", e)))?;

        Ok(ApiRequest::get("subscribers").query(query))
    }

    /// Parse, validate, and send one invocation.
    #[instrument(skip_all)]
    pub async fn call(
        arguments: JsonObject,
        client: &WaitlistClient,
    ) -> Result<CallToolResult, McpError> {
        let params: ListSubscribersParams = parse_params(arguments)?;
        info!(
            "List subscribers tool called: page {} limit {} sort {:?} {:?}",
            params.page, params.limit, params.sort_by, params.sort_dir
        );

        let request = Self::build_request(params)?;
        Ok(send_request(client, request).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListSubscribersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(client: Arc<WaitlistClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { Self::call(args, &client).await }.boxed()
        })
    }
}
