//! Thread chat tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::api::{AnythingLlmClient, ApiResult, path_segment};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{ChatMode, mutating};

/// Parameters for sending a message within a thread.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThreadChatParams {
    /// Workspace slug.
    pub slug: String,

    /// Thread slug.
    pub thread_slug: String,

    /// Message to send.
    pub message: String,

    /// 'chat' or 'query'.
    #[serde(default)]
    pub mode: ChatMode,
}

/// Thread chat tool - calls `POST /workspace/{slug}/thread/{thread_slug}/chat`.
pub struct ChatInThreadTool;

#[async_trait]
impl ToolDefinition for ChatInThreadTool {
    const NAME: &'static str = "anythingllm_chat_in_thread";
    const DESCRIPTION: &'static str = "Send a message within a specific workspace thread.";

    type Params = ThreadChatParams;

    fn annotations() -> ToolAnnotations {
        mutating(false, false)
    }

    async fn run(params: ThreadChatParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let path = format!(
            "/workspace/{}/thread/{}/chat",
            path_segment("slug", &params.slug)?,
            path_segment("thread_slug", &params.thread_slug)?
        );
        client
            .post(&path, json!({ "message": params.message, "mode": params.mode }))
            .await?
            .into_pretty_string()
    }
}
