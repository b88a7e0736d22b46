//! Add subscriber tool.
//!
//! Signs a new subscriber up to the waitlist, optionally attributing the
//! sign-up to a referral code.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    Metadata, is_email, metadata_object, parse_params, send_request,
};
use crate::domains::waitlist::{ApiRequest, WaitlistClient};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for adding a subscriber.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddSubscriberParams {
    /// Subscriber email address.
    #[schemars(email, description = "Email address of the subscriber")]
    pub email: String,

    #[schemars(description = "Subscriber's name")]
    pub name: Option<String>,

    #[schemars(description = "Subscriber's phone number")]
    pub phone: Option<String>,

    /// Referral code of the subscriber who referred this one.
    #[schemars(description = "Referral code of the subscriber who referred them")]
    pub referred_by: Option<String>,

    #[schemars(description = "Additional custom metadata (string values)")]
    pub metadata: Option<Metadata>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add subscriber tool - `POST /sign-up`.
pub struct AddSubscriberTool;

impl AddSubscriberTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_subscriber";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a new subscriber to the waitlist. \
         Optionally attribute the sign-up to an existing subscriber's referral code \
         and attach custom metadata. Returns the created subscriber with position and referral code.";

    /// Validate params and shape the sign-up request.
    ///
    /// `referred_by` is merged into `metadata` last, so it wins over a
    /// metadata key of the same name. An empty merged map is not sent.
    pub fn build_request(params: AddSubscriberParams) -> Result<ApiRequest, ToolError> {
        if !is_email(&params.email) {
            return Err(ToolError::invalid_arguments(format!(
                "Invalid email address: {}",
                params.email
            )));
        }

        let mut body = Map::new();
        body.insert("email".to_string(), Value::String(params.email));
        if let Some(name) = params.name {
            body.insert("name".to_string(), Value::String(name));
        }
        if let Some(phone) = params.phone {
            body.insert("phone".to_string(), Value::String(phone));
        }

        let mut metadata = metadata_object(params.metadata.unwrap_or_default());
        if let Some(referred_by) = params.referred_by {
            metadata.insert("referred_by".to_string(), Value::String(referred_by));
        }
        if !metadata.is_empty() {
            body.insert("metadata".to_string(), Value::Object(metadata));
        }

        Ok(ApiRequest::post("sign-up").json(Value::Object(body)))
    }

    /// Parse, validate, and send one invocation.
    #[instrument(skip_all)]
    pub async fn call(
        arguments: JsonObject,
        client: &WaitlistClient,
    ) -> Result<CallToolResult, McpError> {
        let params: AddSubscriberParams = parse_params(arguments)?;
        info!("Add subscriber tool called");

        let request = Self::build_request(params)?;
        Ok(send_request(client, request).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddSubscriberParams>(),
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
