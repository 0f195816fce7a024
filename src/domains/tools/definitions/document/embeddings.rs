//! Workspace embeddings tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::api::{AnythingLlmClient, ApiError, ApiResult, path_segment};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::mutating;

/// Parameters for adding or removing documents from a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateEmbeddingsParams {
    /// Workspace slug.
    pub slug: String,

    /// Document paths to embed, e.g. "custom-documents/notes.json".
    #[serde(default)]
    pub adds: Option<Vec<String>>,

    /// Document paths to remove from the workspace.
    #[serde(default)]
    pub deletes: Option<Vec<String>>,
}

/// Embeddings tool - calls `POST /workspace/{slug}/update-embeddings`.
pub struct UpdateEmbeddingsTool;

#[async_trait]
impl ToolDefinition for UpdateEmbeddingsTool {
    const NAME: &'static str = "anythingllm_update_embeddings";
    const DESCRIPTION: &'static str =
        "Add documents to or remove documents from a workspace's embeddings.";

    type Params = UpdateEmbeddingsParams;

    fn annotations() -> ToolAnnotations {
        mutating(false, true)
    }

    async fn run(params: UpdateEmbeddingsParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        let mut body = Map::new();
        for (key, paths) in [("adds", params.adds), ("deletes", params.deletes)] {
            if let Some(paths) = paths.filter(|p| !p.is_empty()) {
                body.insert(key.to_string(), Value::from(paths));
            }
        }
        if body.is_empty() {
            return Err(ApiError::config("Provide at least 'adds' or 'deletes'."));
        }

        client
            .post(
                &format!("/workspace/{}/update-embeddings", slug),
                Value::Object(body),
            )
            .await?
            .into_pretty_string()
    }
}
