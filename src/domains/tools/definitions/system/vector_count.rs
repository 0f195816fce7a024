//! Vector count tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

/// Vector count tool - calls `GET /system/vector-count`.
pub struct VectorCountTool;

#[async_trait]
impl ToolDefinition for VectorCountTool {
    const NAME: &'static str = "anythingllm_get_vector_count";
    const DESCRIPTION: &'static str = "Get the total number of vectors stored in the system.";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client.get("/system/vector-count").await?.into_pretty_string()
    }
}
