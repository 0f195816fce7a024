//! Document listing tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

/// Document listing tool - calls `GET /documents`.
pub struct ListDocumentsTool;

#[async_trait]
impl ToolDefinition for ListDocumentsTool {
    const NAME: &'static str = "anythingllm_list_documents";
    const DESCRIPTION: &'static str = "List all documents stored in AnythingLLM.";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client.get("/documents").await?.into_pretty_string()
    }
}
