//! Authenticated dispatcher for the AnythingLLM REST API.
//!
//! One [`AnythingLlmClient`] is built at startup and shared by every tool.
//! Each call to [`AnythingLlmClient::send`] performs exactly one HTTP
//! round-trip against `{base_url}/api/v1{path}`; there are no retries.

use std::fmt;
use std::io;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};
use tracing::{debug, warn};

use super::error::{ApiError, ApiResult};
use crate::core::config::ApiConfig;
use crate::core::error::{Error, Result};

/// Fixed API prefix appended to the base URL.
const API_PREFIX: &str = "/api/v1";

const JSON_MEDIA_TYPE: &str = "application/json";

// ============================================================================
// Response Payload
// ============================================================================

/// Body of an AnythingLLM response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    /// Body declared as `application/json`, parsed.
    Json(Value),

    /// Any other body, verbatim.
    Text(String),
}

impl ResponsePayload {
    /// Parse an error body: JSON when it parses, raw text otherwise.
    fn from_error_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body),
        }
    }

    /// Render the payload as tool output.
    ///
    /// JSON is pretty-printed with two-space indentation; text is returned
    /// unchanged.
    pub fn into_pretty_string(self) -> ApiResult<String> {
        match self {
            Self::Json(value) => Ok(serde_json::to_string_pretty(&value)?),
            Self::Text(text) => Ok(text),
        }
    }

    /// Require a JSON object, as returned by the listing endpoints.
    pub fn into_object(self, endpoint: &str) -> ApiResult<serde_json::Map<String, Value>> {
        match self {
            Self::Json(Value::Object(map)) => Ok(map),
            other => Err(ApiError::unexpected(
                "UnexpectedResponse",
                format!(
                    "Unexpected response type from '{}'. Expected object, got {}.",
                    endpoint,
                    other.type_name()
                ),
            )),
        }
    }

    /// Single-line rendering used in error details.
    ///
    /// JSON strings are written raw; other JSON values use `", "` and `": "`
    /// separators.
    pub fn to_detail_string(&self) -> String {
        match self {
            Self::Json(Value::String(text)) | Self::Text(text) => text.clone(),
            Self::Json(value) => spaced_json(value),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Json(Value::Object(_)) => "object",
            Self::Json(Value::Array(_)) => "array",
            Self::Json(Value::String(_)) => "string",
            Self::Json(Value::Number(_)) => "number",
            Self::Json(Value::Bool(_)) => "boolean",
            Self::Json(Value::Null) => "null",
            Self::Text(_) => "text",
        }
    }
}

/// JSON formatter putting a space after every separator.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn spaced_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

impl fmt::Display for ResponsePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_detail_string())
    }
}

// ============================================================================
// Request Descriptor
// ============================================================================

/// A single request against the AnythingLLM API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl ApiRequest {
    /// Create a request for `path` (relative to `/api/v1`).
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            timeout: None,
        }
    }

    /// GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    /// DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Override the configured timeout for this request only.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The path suffix of this request.
    pub fn path(&self) -> &str {
        &self.path
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for the AnythingLLM REST API.
#[derive(Debug, Clone)]
pub struct AnythingLlmClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AnythingLlmClient {
    /// Build a client from the API configuration.
    ///
    /// Fails when the base URL is not a valid URL. An empty API key is
    /// accepted here and rejected per request instead.
    pub fn new(config: ApiConfig) -> Result<Self> {
        reqwest::Url::parse(&config.base_url).map_err(|e| {
            Error::config(format!(
                "invalid ANYTHINGLLM_BASE_URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Whether requests will carry a credential.
    pub fn has_api_key(&self) -> bool {
        self.config.has_api_key()
    }

    /// Full URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.config.base_url, API_PREFIX, path)
    }

    /// Ensure an API key is configured before any network I/O.
    fn require_api_key(&self) -> ApiResult<&str> {
        if !self.config.has_api_key() {
            return Err(ApiError::config(
                "ANYTHINGLLM_API_KEY is not set. Configure it before using this MCP server.",
            ));
        }
        Ok(&self.config.api_key)
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> ApiResult<ResponsePayload> {
        self.send(ApiRequest::get(path)).await
    }

    /// POST `body` to `path`.
    pub async fn post(&self, path: &str, body: Value) -> ApiResult<ResponsePayload> {
        self.send(ApiRequest::post(path, body)).await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> ApiResult<ResponsePayload> {
        self.send(ApiRequest::delete(path)).await
    }

    /// Execute one authenticated request.
    pub async fn send(&self, request: ApiRequest) -> ApiResult<ResponsePayload> {
        let api_key = self.require_api_key()?;
        let url = self.endpoint(&request.path);
        let timeout = request
            .timeout
            .unwrap_or(Duration::from_secs(self.config.timeout_secs));

        debug!(method = %request.method, %url, "Dispatching AnythingLLM request");

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .bearer_auth(api_key)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .timeout(timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(e, &request))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains(JSON_MEDIA_TYPE));

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, &request))?;

        if !status.is_success() {
            warn!(
                "AnythingLLM {} {} returned HTTP {}",
                request.method,
                request.path,
                status.as_u16()
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: ResponsePayload::from_error_body(body),
            });
        }

        if is_json {
            let value = serde_json::from_str(&body).map_err(|e| {
                ApiError::unexpected(
                    "InvalidJson",
                    format!("Response from '{}' is not valid JSON: {}", request.path, e),
                )
            })?;
            Ok(ResponsePayload::Json(value))
        } else {
            Ok(ResponsePayload::Text(body))
        }
    }

    fn transport_error(&self, err: reqwest::Error, request: &ApiRequest) -> ApiError {
        let err = ApiError::from_transport(err, &self.config.base_url);
        warn!(
            "AnythingLLM {} {} failed ({}): {}",
            request.method,
            request.path,
            err.kind(),
            err
        );
        err
    }
}
