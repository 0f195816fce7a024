//! Workspace detail tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{AnythingLlmClient, ApiResult, path_segment};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::read_only;

/// Parameters for tools addressing a single workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WorkspaceSlugParams {
    /// Workspace slug (e.g. 'papers', 'lands').
    pub slug: String,
}

/// Workspace detail tool - calls `GET /workspace/{slug}`.
pub struct GetWorkspaceTool;

#[async_trait]
impl ToolDefinition for GetWorkspaceTool {
    const NAME: &'static str = "anythingllm_get_workspace";
    const DESCRIPTION: &'static str = "Get detailed information about a specific workspace.";

    type Params = WorkspaceSlugParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(params: WorkspaceSlugParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        client
            .get(&format!("/workspace/{}", slug))
            .await?
            .into_pretty_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockBackend, is_error, result_text};
    use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
    use serde_json::{Value, json};

    fn router() -> Router {
        Router::new().route(
            "/api/v1/workspace/{slug}",
            get(|Path(slug): Path<String>| async move {
                if slug == "papers" {
                    Ok(Json(json!({"workspace": [{"slug": slug, "topN": 4}]})))
                } else {
                    Err((StatusCode::NOT_FOUND, Json(json!({"workspace": null}))))
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_get_workspace_passes_body_through() {
        let backend = MockBackend::start(router()).await;
        let params = WorkspaceSlugParams {
            slug: "papers".to_string(),
        };

        let result = GetWorkspaceTool::execute(params, &backend.client()).await;
        assert!(!is_error(&result));
        let parsed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed, json!({"workspace": [{"slug": "papers", "topN": 4}]}));
    }

    #[tokio::test]
    async fn test_get_workspace_not_found() {
        let backend = MockBackend::start(router()).await;
        let params = WorkspaceSlugParams {
            slug: "missing".to_string(),
        };

        let result = GetWorkspaceTool::execute(params, &backend.client()).await;
        assert!(is_error(&result));
        assert_eq!(
            result_text(&result),
            "Error: Resource not found. Check the slug or ID.\nDetails: {\"workspace\": null}"
        );
    }

    #[tokio::test]
    async fn test_slug_cannot_escape_workspace_path() {
        let router = router().route(
            "/api/v1/system",
            get(|| async { Json(json!({"settings": {"OpenAiKey": "sk-secret"}})) }),
        );
        let backend = MockBackend::start(router).await;
        let params = WorkspaceSlugParams {
            slug: "../system".to_string(),
        };

        // Encoded as one segment, the slug reaches the workspace route.
        let result = GetWorkspaceTool::execute(params, &backend.client()).await;
        let text = result_text(&result);
        assert!(!text.contains("sk-secret"), "{}", text);
        assert!(text.starts_with("Error: Resource not found."), "{}", text);
    }

    #[tokio::test]
    async fn test_dot_slug_rejected_locally() {
        let backend = MockBackend::start(router()).await;
        let params = WorkspaceSlugParams {
            slug: "..".to_string(),
        };

        let result = GetWorkspaceTool::execute(params, &backend.client()).await;
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "Error: Invalid slug '..'.");
        assert_eq!(backend.hits(), 0);
    }

    #[test]
    fn test_slug_schema_description() {
        let tool = GetWorkspaceTool::to_tool();
        let description = tool.input_schema["properties"]["slug"]["description"]
            .as_str()
            .unwrap();
        assert_eq!(description, "Workspace slug (e.g. 'papers', 'lands').");
    }

    #[test]
    fn test_params_require_slug() {
        assert!(serde_json::from_str::<WorkspaceSlugParams>("{}").is_err());
    }
}
