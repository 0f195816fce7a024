//! Thread chat history tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use super::ThreadParams;
use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::read_only;

/// Thread history tool - calls `GET /workspace/{slug}/thread/{thread_slug}/chats`.
pub struct ThreadChatsTool;

#[async_trait]
impl ToolDefinition for ThreadChatsTool {
    const NAME: &'static str = "anythingllm_get_thread_chats";
    const DESCRIPTION: &'static str = "Get chat history for a specific thread in a workspace.";

    type Params = ThreadParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(params: ThreadParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client
            .get(&format!("{}/chats", params.path()?))
            .await?
            .into_pretty_string()
    }
}
