//! Workspace chat tool.
//!
//! Mode 'chat' uses document context plus conversation history; mode
//! 'query' uses document context only.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::api::{AnythingLlmClient, ApiResult, path_segment};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{ChatMode, mutating};

/// Parameters for sending a message to a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChatParams {
    /// Workspace slug.
    pub slug: String,

    /// Message to send.
    pub message: String,

    /// 'chat' (context + history) or 'query' (documents only).
    #[serde(default)]
    pub mode: ChatMode,
}

/// Workspace chat tool - calls `POST /workspace/{slug}/chat`.
pub struct ChatTool;

#[async_trait]
impl ToolDefinition for ChatTool {
    const NAME: &'static str = "anythingllm_chat";
    const DESCRIPTION: &'static str = "Send a message to a workspace and get a response. \
         Mode 'chat' uses document context + conversation history. \
         Mode 'query' uses only document context (no history).";

    type Params = ChatParams;

    fn annotations() -> ToolAnnotations {
        mutating(false, false)
    }

    async fn run(params: ChatParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        client
            .post(
                &format!("/workspace/{}/chat", slug),
                json!({ "message": params.message, "mode": params.mode }),
            )
            .await?
            .into_pretty_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockBackend, is_error, result_text};
    use axum::{Json, Router, extract::Path, routing::post};
    use serde_json::Value;

    #[tokio::test]
    async fn test_chat_sends_message_and_mode() {
        let router = Router::new().route(
            "/api/v1/workspace/{slug}/chat",
            post(|Path(slug): Path<String>, Json(body): Json<Value>| async move {
                Json(json!({
                    "type": "textResponse",
                    "textResponse": format!("{} answered in {} mode", slug, body["mode"].as_str().unwrap_or("?")),
                    "sources": []
                }))
            }),
        );
        let backend = MockBackend::start(router).await;
        let params: ChatParams =
            serde_json::from_value(json!({"slug": "papers", "message": "Summarize"})).unwrap();
        assert_eq!(params.mode, ChatMode::Chat);

        let result = ChatTool::execute(params, &backend.client()).await;
        assert!(!is_error(&result));
        let parsed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["textResponse"], "papers answered in chat mode");
    }

    #[tokio::test]
    async fn test_chat_query_mode_rate_limited() {
        let router = Router::new().route(
            "/api/v1/workspace/{slug}/chat",
            post(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let backend = MockBackend::start(router).await;
        let params = ChatParams {
            slug: "papers".to_string(),
            message: "hi".to_string(),
            mode: ChatMode::Query,
        };

        let result = ChatTool::execute(params, &backend.client()).await;
        assert!(is_error(&result));
        assert!(result_text(&result).starts_with("Error: Rate limit exceeded."));
    }
}
