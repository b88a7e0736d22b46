//! Update subscriber tool.
//!
//! Partial update: only fields present in the call are sent, so an explicit
//! `""` or `0` still reaches Waitlister while an omitted field never does.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use tracing::{info, instrument};

use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    Metadata, metadata_object, parse_params, send_request,
};
use crate::domains::waitlist::{ApiRequest, WaitlistClient};

/// Parameters for updating a subscriber.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateSubscriberParams {
    #[schemars(description = "Subscriber ID or email address")]
    pub id_or_email: String,

    #[schemars(description = "New name")]
    pub name: Option<String>,

    #[schemars(description = "New phone number")]
    pub phone: Option<String>,

    /// Forwarded unchanged, so integers stay integers.
    #[schemars(description = "New points value")]
    pub points: Option<Number>,

    /// Merged server-side with the subscriber's existing metadata.
    #[schemars(description = "Metadata to merge with the subscriber's existing metadata")]
    pub metadata: Option<Metadata>,
}

/// Update subscriber tool - `PUT /subscribers/{id_or_email}`.
pub struct UpdateSubscriberTool;

impl UpdateSubscriberTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_subscriber";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update a waitlist subscriber's name, phone, points, or metadata. \
         Only the fields provided are changed; metadata is merged with existing metadata.";

    /// Build the partial-update request. No fields at all yields `{}`.
    pub fn build_request(params: UpdateSubscriberParams) -> Result<ApiRequest, ToolError> {
        if params.id_or_email.trim().is_empty() {
            return Err(ToolError::invalid_arguments("id_or_email must not be empty"));
        }

        let mut body = Map::new();
        if let Some(name) = params.name {
            body.insert("name".to_string(), Value::String(name));
        }
        if let Some(phone) = params.phone {
            body.insert("phone".to_string(), Value::String(phone));
        }
        if let Some(points) = params.points {
            body.insert("points".to_string(), Value::Number(points));
        }
        if let Some(metadata) = params.metadata {
            body.insert("metadata".to_string(), Value::Object(metadata_object(metadata)));
        }

        Ok(ApiRequest::put("subscribers")
            .segment(params.id_or_email)
            .json(Value::Object(body)))
    }

    /// Parse, validate, and send one invocation.
    #[instrument(skip_all)]
    pub async fn call(
        arguments: JsonObject,
        client: &WaitlistClient,
    ) -> Result<CallToolResult, McpError> {
        let params: UpdateSubscriberParams = parse_params(arguments)?;
        info!("Update subscriber tool called");

        let request = Self::build_request(params)?;
        Ok(send_request(client, request).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateSubscriberParams>(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::waitlist::testing::StubServer;
    use serde_json::json;

    fn body_for(args: Value) -> Value {
        let params: UpdateSubscriberParams = serde_json::from_value(args).unwrap();
        UpdateSubscriberTool::build_request(params)
            .unwrap()
            .body()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_omitted_fields_absent() {
        let body = body_for(json!({ "id_or_email": "a@b.com", "name": "Ada" }));
        assert_eq!(body, json!({ "name": "Ada" }));
    }

    #[test]
    fn test_zero_and_empty_values_present() {
        let body = body_for(json!({ "id_or_email": "a@b.com", "phone": "", "points": 0 }));
        assert_eq!(body, json!({ "phone": "", "points": 0 }));
    }

    #[test]
    fn test_points_forwarded_without_float_conversion() {
        let params: UpdateSubscriberParams = serde_json::from_value(json!({
            "id_or_email": "x",
            "points": 9007199254740993u64
        }))
        .unwrap();
        let request = UpdateSubscriberTool::build_request(params).unwrap();
        let wire = serde_json::to_string(request.body().unwrap()).unwrap();
        assert_eq!(wire, r#"{"points":9007199254740993}"#);

        let body = body_for(json!({ "id_or_email": "x", "points": 2.5 }));
        assert_eq!(body, json!({ "points": 2.5 }));
    }

    #[test]
    fn test_no_fields_sends_empty_object() {
        let body = body_for(json!({ "id_or_email": "a@b.com" }));
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_metadata_sent_without_referral_merge() {
        let body = body_for(json!({
            "id_or_email": "sub_1",
            "metadata": { "plan": "pro" }
        }));
        assert_eq!(body, json!({ "metadata": { "plan": "pro" } }));
    }

    #[tokio::test]
    async fn test_update_uses_put() {
        let stub = StubServer::start(200, r#"{"id":"sub_1","points":10}"#).await;
        let client = stub.client("k", "w");
        let args = json!({ "id_or_email": "sub_1", "points": 10 })
            .as_object()
            .unwrap()
            .clone();

        let result = UpdateSubscriberTool::call(args, &client).await.unwrap();
        assert_eq!(result.is_error, Some(false));

        let recorded = stub.single_request();
        assert_eq!(recorded.method, "PUT");
        assert_eq!(recorded.path, "/api/v1/waitlist/w/subscribers/sub_1");
        assert_eq!(recorded.json_body(), json!({ "points": 10 }));
        assert_eq!(recorded.body, br#"{"points":10}"#);
    }
}
