//! Thread deletion tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use super::ThreadParams;
use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::mutating;

/// Thread deletion tool - calls `DELETE /workspace/{slug}/thread/{thread_slug}`.
pub struct DeleteThreadTool;

#[async_trait]
impl ToolDefinition for DeleteThreadTool {
    const NAME: &'static str = "anythingllm_delete_thread";
    const DESCRIPTION: &'static str = "Delete a chat thread from a workspace.";

    type Params = ThreadParams;

    fn annotations() -> ToolAnnotations {
        mutating(true, false)
    }

    async fn run(params: ThreadParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client.delete(&params.path()?).await?;
        Ok(format!(
            "Thread '{}' deleted from workspace '{}'.",
            params.thread_slug, params.slug
        ))
    }
}
