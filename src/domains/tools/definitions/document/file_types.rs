//! Accepted file types tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

/// Accepted file types tool - calls `GET /document/accepted-file-types`.
pub struct AcceptedFileTypesTool;

#[async_trait]
impl ToolDefinition for AcceptedFileTypesTool {
    const NAME: &'static str = "anythingllm_get_accepted_file_types";
    const DESCRIPTION: &'static str = "Get the file types AnythingLLM accepts for upload.";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        client
            .get("/document/accepted-file-types")
            .await?
            .into_pretty_string()
    }
}
