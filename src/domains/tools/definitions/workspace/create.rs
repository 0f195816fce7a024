//! Workspace creation tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::mutating;

/// Parameters for creating a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWorkspaceParams {
    /// Name for the new workspace.
    pub name: String,
}

/// Workspace creation tool - calls `POST /workspace/new`.
pub struct CreateWorkspaceTool;

#[async_trait]
impl ToolDefinition for CreateWorkspaceTool {
    const NAME: &'static str = "anythingllm_create_workspace";
    const DESCRIPTION: &'static str = "Create a new workspace.";

    type Params = CreateWorkspaceParams;

    fn annotations() -> ToolAnnotations {
        mutating(false, false)
    }

    async fn run(params: CreateWorkspaceParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client
            .post("/workspace/new", json!({ "name": params.name }))
            .await?
            .into_pretty_string()
    }
}
