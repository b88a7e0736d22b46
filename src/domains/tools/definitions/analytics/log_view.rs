//! Log view tool.
//!
//! Records a page view of the waitlist form for conversion analytics.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{parse_params, send_request};
use crate::domains::waitlist::{ApiRequest, WaitlistClient};

/// Parameters for logging a view.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LogViewParams {
    #[schemars(description = "Unique visitor identifier, used to deduplicate views")]
    pub visitor_id: Option<String>,

    #[schemars(description = "Domain the visitor came from")]
    pub referring_domain: Option<String>,
}

/// Log view tool - `POST /log-view`.
pub struct LogViewTool;

impl LogViewTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "log_view";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Log a view of the waitlist page for analytics. \
         Optionally pass a visitor ID for deduplication and the referring domain.";

    /// `referring_domain` travels inside `metadata`, not at the top level.
    pub fn build_request(params: LogViewParams) -> ApiRequest {
        let mut body = Map::new();
        if let Some(visitor_id) = params.visitor_id {
            body.insert("visitor_id".to_string(), Value::String(visitor_id));
        }
        if let Some(referring_domain) = params.referring_domain {
            body.insert(
                "metadata".to_string(),
                json!({ "referring_domain": referring_domain }),
            );
        }

        ApiRequest::post("log-view").json(Value::Object(body))
    }

    #[instrument(skip_all)]
    pub async fn call(
        arguments: JsonObject,
        client: &WaitlistClient,
    ) -> Result<CallToolResult, McpError> {
        let params: LogViewParams = parse_params(arguments)?;
        info!("Log view tool called");

        Ok(send_request(client, Self::build_request(params)).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LogViewParams>(),
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
