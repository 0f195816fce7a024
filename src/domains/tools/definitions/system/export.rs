//! Chat export tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

/// Chat export tool - calls `GET /system/export-chats`.
pub struct ExportChatsTool;

#[async_trait]
impl ToolDefinition for ExportChatsTool {
    const NAME: &'static str = "anythingllm_export_chats";
    const DESCRIPTION: &'static str = "Export all chat logs from all workspaces.";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client.get("/system/export-chats").await?.into_pretty_string()
    }
}
