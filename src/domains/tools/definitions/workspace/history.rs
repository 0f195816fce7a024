//! Workspace chat history tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{AnythingLlmClient, ApiRequest, ApiResult, path_segment, validate_range};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{SortOrder, read_only};

/// Parameters for reading a workspace's chat history.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChatHistoryParams {
    /// Workspace slug.
    pub slug: String,

    /// Maximum number of chats to return (1-1000).
    #[serde(default)]
    pub limit: Option<i64>,

    /// Sort order by creation time: 'asc' or 'desc'.
    #[serde(default, rename = "orderBy")]
    pub order_by: Option<SortOrder>,
}

/// Chat history tool - calls `GET /workspace/{slug}/chats`.
pub struct ChatHistoryTool;

#[async_trait]
impl ToolDefinition for ChatHistoryTool {
    const NAME: &'static str = "anythingllm_get_chat_history";
    const DESCRIPTION: &'static str = "Get the chat history for a workspace.";

    type Params = ChatHistoryParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(params: ChatHistoryParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        let mut request = ApiRequest::get(format!("/workspace/{}/chats", slug));
        if let Some(limit) = params.limit {
            validate_range("limit", limit, 1, 1000)?;
            request = request.with_query("limit", limit);
        }
        if let Some(order) = params.order_by {
            request = request.with_query("orderBy", order.as_str());
        }

        client.send(request).await?.into_pretty_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockBackend, is_error, result_text};
    use axum::{Json, Router, extract::Query, routing::get};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    fn router() -> Router {
        Router::new().route(
            "/api/v1/workspace/{slug}/chats",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                Json(json!({"history": [], "query": query}))
            }),
        )
    }

    #[tokio::test]
    async fn test_history_without_options() {
        let backend = MockBackend::start(router()).await;
        let params = ChatHistoryParams {
            slug: "papers".to_string(),
            limit: None,
            order_by: None,
        };

        let result = ChatHistoryTool::execute(params, &backend.client()).await;
        let parsed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed, json!({"history": [], "query": {}}));
    }

    #[tokio::test]
    async fn test_history_forwards_query() {
        let backend = MockBackend::start(router()).await;
        let params = ChatHistoryParams {
            slug: "papers".to_string(),
            limit: Some(25),
            order_by: Some(SortOrder::Desc),
        };

        let result = ChatHistoryTool::execute(params, &backend.client()).await;
        let parsed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["query"], json!({"limit": "25", "orderBy": "desc"}));
    }

    #[tokio::test]
    async fn test_history_rejects_zero_limit() {
        let backend = MockBackend::start(router()).await;
        let params = ChatHistoryParams {
            slug: "papers".to_string(),
            limit: Some(0),
            order_by: None,
        };

        let result = ChatHistoryTool::execute(params, &backend.client()).await;
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "Error: limit must be between 1 and 1000.");
        assert_eq!(backend.hits(), 0);
    }

    #[tokio::test]
    async fn test_history_rejects_negative_limit() {
        let backend = MockBackend::start(router()).await;
        let params: ChatHistoryParams =
            serde_json::from_value(json!({"slug": "papers", "limit": -5})).unwrap();

        let result = ChatHistoryTool::execute(params, &backend.client()).await;
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "Error: limit must be between 1 and 1000.");
        assert_eq!(backend.hits(), 0);
    }
}
