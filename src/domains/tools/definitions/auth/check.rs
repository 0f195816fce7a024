//! Authentication check tool.
//!
//! Verifies that the configured API key is accepted and that AnythingLLM is
//! reachable.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

/// Auth check tool - calls `GET /auth`.
pub struct CheckAuthTool;

#[async_trait]
impl ToolDefinition for CheckAuthTool {
    const NAME: &'static str = "anythingllm_check_auth";
    const DESCRIPTION: &'static str =
        "Verify that the API key is valid and AnythingLLM is reachable.";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client.get("/auth").await?.into_pretty_string()
    }
}
