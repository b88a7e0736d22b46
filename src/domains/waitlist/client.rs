//! Authenticated HTTP client for the Waitlister REST API.

use reqwest::Url;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{ApiRequest, WaitlistError};
use crate::core::config::WaitlisterConfig;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Headers callers may not override.
const RESERVED_HEADERS: [&str; 2] = ["content-type", "x-api-key"];

/// Client bound to one waitlist and one API key.
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct WaitlistClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    waitlist_key: String,
}

impl std::fmt::Debug for WaitlistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl WaitlistClient {
    /// Create a client with a default `reqwest` connection pool.
    pub fn new(config: &WaitlisterConfig) -> Result<Self, WaitlistError> {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Create a client on top of an existing `reqwest::Client`.
    pub fn with_http(
        config: &WaitlisterConfig,
        http: reqwest::Client,
    ) -> Result<Self, WaitlistError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| WaitlistError::invalid_url(format!("{}: {}", config.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(WaitlistError::invalid_url(format!(
                "{} cannot be used as a base URL",
                config.base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            api_key: config.credentials.api_key.clone(),
            waitlist_key: config.credentials.waitlist_key.clone(),
        })
    }

    /// Full URL of a request: `{base}/api/v1/waitlist/{waitlist_key}/{segments...}?{query}`.
    pub fn endpoint(&self, request: &ApiRequest) -> Result<Url, WaitlistError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| WaitlistError::invalid_url(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .extend(["api", "v1", "waitlist", self.waitlist_key.as_str()])
                .extend(request.segments());
        }
        url.set_query(request.query_string());
        Ok(url)
    }

    /// Headers sent with a request: the fixed JSON and API-key headers,
    /// followed by any caller headers that do not collide with them.
    pub fn headers(&self, request: &ApiRequest) -> Result<HeaderMap, WaitlistError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| WaitlistError::invalid_header(API_KEY_HEADER))?,
        );

        for (name, value) in request.headers() {
            if RESERVED_HEADERS.contains(&name.to_ascii_lowercase().as_str()) {
                warn!("Ignoring caller-supplied reserved header: {}", name);
                continue;
            }
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| WaitlistError::invalid_header(format!("{}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| WaitlistError::invalid_header(format!("{}: {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Send a request and normalize the outcome.
    ///
    /// The body is parsed as JSON before the status is looked at, so a
    /// non-JSON body fails with [`WaitlistError::InvalidResponse`] even on
    /// an error status. Success bodies are returned untouched.
    #[instrument(skip_all, fields(method = %request.method(), path = %request.path()))]
    pub async fn send(&self, request: ApiRequest) -> Result<Value, WaitlistError> {
        let url = self.endpoint(&request)?;
        let headers = self.headers(&request)?;

        debug!("Sending {} {}", request.method(), request.path());

        let mut builder = self
            .http
            .request(request.method().clone(), url)
            .headers(headers);
        if let Some(body) = request.body() {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if status.is_success() {
            debug!("Waitlister responded {}", status.as_u16());
            return Ok(body);
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "API error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
            });

        warn!("Waitlister error {}: {}", status.as_u16(), message);
        Err(WaitlistError::api(status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;
    use crate::domains::waitlist::testing::StubServer;
    use serde_json::json;

    fn config(base_url: &str) -> WaitlisterConfig {
        WaitlisterConfig {
            base_url: base_url.to_string(),
            credentials: CredentialsConfig::new("secret-key", "wl_123"),
        }
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = WaitlistClient::new(&config("https://waitlister.me")).unwrap();
        let url = client
            .endpoint(&ApiRequest::get("subscribers").segment("a b/c?d"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://waitlister.me/api/v1/waitlist/wl_123/subscribers/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_endpoint_keeps_query() {
        let client = WaitlistClient::new(&config("https://waitlister.me/")).unwrap();
        let url = client
            .endpoint(&ApiRequest::get("subscribers").query("limit=20&page=1"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://waitlister.me/api/v1/waitlist/wl_123/subscribers?limit=20&page=1"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = WaitlistClient::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, WaitlistError::InvalidUrl(_)));
    }

    #[test]
    fn test_reserved_headers_cannot_be_overridden() {
        let client = WaitlistClient::new(&config("https://waitlister.me")).unwrap();
        let request = ApiRequest::get("subscribers")
            .header("x-api-key", "stolen")
            .header("Content-Type", "text/plain")
            .header("X-Request-Id", "42");
        let headers = client.headers(&request).unwrap();

        assert_eq!(headers.get("x-api-key").unwrap(), "secret-key");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(headers.get("x-request-id").unwrap(), "42");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = WaitlistClient::new(&config("https://waitlister.me")).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("secret-key"));
        assert!(!debug_str.contains("wl_123"));
    }

    #[tokio::test]
    async fn test_send_success_passes_body_through() {
        let stub = StubServer::start(201, r#"{"id":"1","position":5}"#).await;
        let client = stub.client("secret-key", "wl_123");

        let value = client
            .send(ApiRequest::post("sign-up").json(json!({ "email": "a@b.com" })))
            .await
            .unwrap();
        assert_eq!(value, json!({ "id": "1", "position": 5 }));

        let recorded = stub.single_request();
        assert_eq!(recorded.method, "POST");
        assert_eq!(recorded.path, "/api/v1/waitlist/wl_123/sign-up");
        assert_eq!(recorded.header("x-api-key"), Some("secret-key"));
        assert_eq!(recorded.header("content-type"), Some("application/json"));
        assert_eq!(recorded.json_body(), json!({ "email": "a@b.com" }));
    }

    #[tokio::test]
    async fn test_send_uses_api_message() {
        let stub = StubServer::start(404, r#"{"message":"Not found"}"#).await;
        let client = stub.client("k", "w");

        let err = client
            .send(ApiRequest::get("subscribers").segment("a@b.com"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Not found");
    }

    #[tokio::test]
    async fn test_send_generic_message_without_message_field() {
        let stub = StubServer::start(500, r#"{"error":"boom"}"#).await;
        let client = stub.client("k", "w");

        let err = client.send(ApiRequest::get("subscribers")).await.unwrap_err();
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_send_non_string_message_uses_generic() {
        let stub = StubServer::start(422, r#"{"message":{"field":"email"}}"#).await;
        let client = stub.client("k", "w");

        let err = client.send(ApiRequest::get("subscribers")).await.unwrap_err();
        assert_eq!(err.to_string(), "API error: 422 Unprocessable Entity");
    }

    #[tokio::test]
    async fn test_send_non_json_body_is_parse_error() {
        let stub = StubServer::start(502, "<html>Bad Gateway</html>").await;
        let client = stub.client("k", "w");

        let err = client.send(ApiRequest::get("subscribers")).await.unwrap_err();
        assert!(matches!(err, WaitlistError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_get_sends_no_body() {
        let stub = StubServer::start(200, r#"{"subscribers":[]}"#).await;
        let client = stub.client("k", "w");

        client.send(ApiRequest::get("subscribers")).await.unwrap();
        let recorded = stub.single_request();
        assert_eq!(recorded.method, "GET");
        assert!(recorded.body.is_empty());
    }
}
