//! Embed widget listing tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

/// Embed listing tool - calls `GET /embed`.
pub struct ListEmbedsTool;

#[async_trait]
impl ToolDefinition for ListEmbedsTool {
    const NAME: &'static str = "anythingllm_list_embeds";
    const DESCRIPTION: &'static str = "List all embed configurations (public chat widgets).";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client.get("/embed").await?.into_pretty_string()
    }
}
