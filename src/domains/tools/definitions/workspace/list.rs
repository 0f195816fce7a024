//! Workspace listing tool.
//!
//! Returns a compact summary of every workspace instead of the full objects,
//! which carry prompts, model settings and the complete thread list.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

const ENDPOINT: &str = "/workspaces";

// ============================================================================
// Upstream Shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct WorkspaceListing {
    #[serde(default)]
    workspaces: Vec<WorkspaceRecord>,
}

/// The fields we keep from an upstream workspace object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceRecord {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    slug: Value,
    #[serde(default)]
    chat_mode: Value,
    #[serde(default)]
    vector_search_mode: Value,
    #[serde(default)]
    threads: Option<Vec<Value>>,
    #[serde(default)]
    created_at: Value,
}

// ============================================================================
// Output Structure
// ============================================================================

#[derive(Debug, Serialize)]
struct WorkspaceList {
    total: usize,
    workspaces: Vec<WorkspaceSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceSummary {
    name: Value,
    slug: Value,
    chat_mode: Value,
    vector_search_mode: Value,
    threads: usize,
    created_at: Value,
}

impl From<WorkspaceRecord> for WorkspaceSummary {
    fn from(ws: WorkspaceRecord) -> Self {
        let chat_mode = match ws.chat_mode {
            Value::Null => Value::String("chat".to_string()),
            mode => mode,
        };
        Self {
            name: ws.name,
            slug: ws.slug,
            chat_mode,
            vector_search_mode: ws.vector_search_mode,
            threads: ws.threads.map_or(0, |t| t.len()),
            created_at: ws.created_at,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Workspace listing tool - calls `GET /workspaces`.
pub struct ListWorkspacesTool;

#[async_trait]
impl ToolDefinition for ListWorkspacesTool {
    const NAME: &'static str = "anythingllm_list_workspaces";
    const DESCRIPTION: &'static str = "List all workspaces in the AnythingLLM instance with their slugs, settings, and thread info.";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let object = client.get(ENDPOINT).await?.into_object(ENDPOINT)?;
        let listing: WorkspaceListing = serde_json::from_value(Value::Object(object))?;

        let workspaces: Vec<WorkspaceSummary> =
            listing.workspaces.into_iter().map(Into::into).collect();
        let summary = WorkspaceList {
            total: workspaces.len(),
            workspaces,
        };

        Ok(serde_json::to_string_pretty(&summary)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockBackend, is_error, result_text};
    use axum::{Json, Router, routing::get};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_workspaces_reshapes_entries() {
        let router = Router::new().route(
            "/api/v1/workspaces",
            get(|| async {
                Json(json!({
                    "workspaces": [
                        {
                            "id": 1,
                            "name": "Papers",
                            "slug": "papers",
                            "openAiPrompt": "internal prompt",
                            "chatMode": "query",
                            "vectorSearchMode": "default",
                            "createdAt": "2024-01-01T00:00:00.000Z",
                            "threads": [{"slug": "t1"}, {"slug": "t2"}]
                        },
                        {
                            "id": 2,
                            "name": "Lands",
                            "slug": "lands",
                            "similarityThreshold": 0.25,
                            "createdAt": "2024-02-01T00:00:00.000Z"
                        }
                    ]
                }))
            }),
        );
        let backend = MockBackend::start(router).await;

        let result = ListWorkspacesTool::execute(EmptyParams::default(), &backend.client()).await;
        assert!(!is_error(&result));

        let parsed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(
            parsed,
            json!({
                "total": 2,
                "workspaces": [
                    {
                        "name": "Papers",
                        "slug": "papers",
                        "chatMode": "query",
                        "vectorSearchMode": "default",
                        "threads": 2,
                        "createdAt": "2024-01-01T00:00:00.000Z"
                    },
                    {
                        "name": "Lands",
                        "slug": "lands",
                        "chatMode": "chat",
                        "vectorSearchMode": null,
                        "threads": 0,
                        "createdAt": "2024-02-01T00:00:00.000Z"
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_list_workspaces_missing_key_is_empty() {
        let router = Router::new().route("/api/v1/workspaces", get(|| async { Json(json!({})) }));
        let backend = MockBackend::start(router).await;

        let result = ListWorkspacesTool::execute(EmptyParams::default(), &backend.client()).await;
        let parsed: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed, json!({"total": 0, "workspaces": []}));
    }

    #[tokio::test]
    async fn test_list_workspaces_rejects_non_object() {
        let router = Router::new().route("/api/v1/workspaces", get(|| async { Json(json!([])) }));
        let backend = MockBackend::start(router).await;

        let result = ListWorkspacesTool::execute(EmptyParams::default(), &backend.client()).await;
        assert!(is_error(&result));
        assert!(result_text(&result).starts_with("Error: UnexpectedResponse: "));
    }
}
