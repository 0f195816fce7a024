//! Workspace deletion tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use super::get::WorkspaceSlugParams;
use crate::core::api::{AnythingLlmClient, ApiResult, path_segment};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::mutating;

/// Workspace deletion tool - calls `DELETE /workspace/{slug}`.
pub struct DeleteWorkspaceTool;

#[async_trait]
impl ToolDefinition for DeleteWorkspaceTool {
    const NAME: &'static str = "anythingllm_delete_workspace";
    const DESCRIPTION: &'static str = "Permanently delete a workspace. This action cannot be undone.";

    type Params = WorkspaceSlugParams;

    fn annotations() -> ToolAnnotations {
        mutating(true, false)
    }

    async fn run(params: WorkspaceSlugParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        client.delete(&format!("/workspace/{}", slug)).await?;
        Ok(format!("Workspace '{}' deleted successfully.", params.slug))
    }
}
