//! Model listing tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

/// Model listing tool - calls `GET /openai/models`.
pub struct ListModelsTool;

#[async_trait]
impl ToolDefinition for ListModelsTool {
    const NAME: &'static str = "anythingllm_list_models";
    const DESCRIPTION: &'static str = "List available models via the OpenAI-compatible endpoint.";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client.get("/openai/models").await?.into_pretty_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockBackend, is_error, result_text};
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::json;

    #[tokio::test]
    async fn test_models_unknown_status_is_generic() {
        let router = Router::new().route(
            "/api/v1/openai/models",
            get(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": "warming up"})),
                )
            }),
        );
        let backend = MockBackend::start(router).await;

        let result = ListModelsTool::execute(EmptyParams::default(), &backend.client()).await;
        assert!(is_error(&result));
        assert_eq!(
            result_text(&result),
            "Error: API error (HTTP 503).\nDetails: {\"error\": \"warming up\"}"
        );
    }
}
