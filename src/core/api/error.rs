//! AnythingLLM API error types.
//!
//! Every failure a tool can hit is an [`ApiError`]. Tools never propagate it
//! to the MCP runtime; [`ApiError::user_message`] renders it into the text
//! result instead.

use thiserror::Error;

use super::client::ResponsePayload;

/// Result type for AnythingLLM API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classified failure of a tool invocation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing credential or missing required argument combination.
    #[error("{0}")]
    Config(String),

    /// Argument outside its declared bounds.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: ResponsePayload },

    /// The request exceeded its timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server could not be reached.
    #[error("cannot connect to {base_url}: {detail}")]
    Connect { base_url: String, detail: String },

    /// Any other transport-level failure.
    #[error("{0}")]
    Transport(String),

    /// Anything else: malformed responses, serialization faults.
    #[error("{kind}: {detail}")]
    Unexpected { kind: &'static str, detail: String },
}

impl ApiError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new unclassified error.
    pub fn unexpected(kind: &'static str, detail: impl Into<String>) -> Self {
        Self::Unexpected {
            kind,
            detail: detail.into(),
        }
    }

    /// Classify a transport failure reported by reqwest.
    ///
    /// A connect timeout is both a timeout and a connection failure; the
    /// timeout wins. Connection failures are checked before the generic
    /// transport branch.
    pub fn from_transport(err: reqwest::Error, base_url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect {
                base_url: base_url.to_string(),
                detail: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Short category name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Validation(_) => "validation",
            Self::Status { .. } => "http_status",
            Self::Timeout(_) => "timeout",
            Self::Connect { .. } => "connect",
            Self::Transport(_) => "transport",
            Self::Unexpected { .. } => "unexpected",
        }
    }

    /// Render the error as the text returned to the MCP client.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, detail } => format!(
                "Error: {}\nDetails: {}",
                status_message(*status),
                detail.to_detail_string()
            ),
            Self::Config(msg) | Self::Validation(msg) => format!("Error: {}", msg),
            Self::Timeout(_) => {
                "Error: Request timed out. AnythingLLM may be busy or unreachable.".to_string()
            }
            Self::Connect { base_url, .. } => format!(
                "Error: Cannot connect to AnythingLLM at {}. Is it running?",
                base_url
            ),
            Self::Transport(detail) => format!("Error: Request failed: {}", detail),
            Self::Unexpected { kind, detail } => format!("Error: {}: {}", kind, detail),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected("SerializationError", err.to_string())
    }
}

/// Fixed message for a known status code, generic one otherwise.
fn status_message(status: u16) -> String {
    match status {
        401 => "Authentication failed. Check your ANYTHINGLLM_API_KEY.".to_string(),
        403 => "Permission denied. Your API key may lack required permissions.".to_string(),
        404 => "Resource not found. Check the slug or ID.".to_string(),
        429 => "Rate limit exceeded. Wait before retrying.".to_string(),
        500 => "Internal server error in AnythingLLM. Check LLM provider connectivity.".to_string(),
        other => format!("API error (HTTP {}).", other),
    }
}
