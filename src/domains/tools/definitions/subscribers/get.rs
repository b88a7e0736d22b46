//! Get subscriber tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{parse_params, send_request};
use crate::domains::waitlist::{ApiRequest, WaitlistClient};

/// Parameters for fetching one subscriber.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSubscriberParams {
    /// Subscriber id or email; Waitlister decides which.
    #[schemars(description = "Subscriber ID or email address")]
    pub id_or_email: String,
}

/// Get subscriber tool - `GET /subscribers/{id_or_email}`.
pub struct GetSubscriberTool;

impl GetSubscriberTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_subscriber";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of a single waitlist subscriber by ID or email, \
         including position, points, referral code, referral count, and metadata.";

    pub fn build_request(params: GetSubscriberParams) -> Result<ApiRequest, ToolError> {
        if params.id_or_email.trim().is_empty() {
            return Err(ToolError::invalid_arguments("id_or_email must not be empty"));
        }
        Ok(ApiRequest::get("subscribers").segment(params.id_or_email))
    }

    /// Parse, validate, and send one invocation.
    #[instrument(skip_all)]
    pub async fn call(
        arguments: JsonObject,
        client: &WaitlistClient,
    ) -> Result<CallToolResult, McpError> {
        let params: GetSubscriberParams = parse_params(arguments)?;
        info!("Get subscriber tool called");

        let request = Self::build_request(params)?;
        Ok(send_request(client, request).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSubscriberParams>(),
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
