//! Thread creation tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::api::{AnythingLlmClient, ApiResult, path_segment};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::mutating;

/// Parameters for creating a thread.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateThreadParams {
    /// Workspace slug.
    pub slug: String,

    /// Optional thread name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Thread creation tool - calls `POST /workspace/{slug}/thread/new`.
pub struct CreateThreadTool;

#[async_trait]
impl ToolDefinition for CreateThreadTool {
    const NAME: &'static str = "anythingllm_create_thread";
    const DESCRIPTION: &'static str = "Create a new chat thread within a workspace.";

    type Params = CreateThreadParams;

    fn annotations() -> ToolAnnotations {
        mutating(false, false)
    }

    async fn run(params: CreateThreadParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        let mut body = Map::new();
        if let Some(name) = params.name.filter(|n| !n.is_empty()) {
            body.insert("name".to_string(), Value::String(name));
        }

        client
            .post(
                &format!("/workspace/{}/thread/new", slug),
                Value::Object(body),
            )
            .await?
            .into_pretty_string()
    }
}
