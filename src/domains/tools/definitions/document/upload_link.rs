//! Link scraping tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::api::{AnythingLlmClient, ApiError, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for scraping a web page into AnythingLLM.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UploadLinkParams {
    /// URL to scrape (http or https).
    pub link: String,
}

/// Link upload tool - calls `POST /document/upload-link`.
///
/// AnythingLLM fetches the page itself, so this is the one tool that
/// reaches outside the instance.
pub struct UploadLinkTool;

#[async_trait]
impl ToolDefinition for UploadLinkTool {
    const NAME: &'static str = "anythingllm_upload_link";
    const DESCRIPTION: &'static str =
        "Scrape a web page and store it as a document in AnythingLLM.";

    type Params = UploadLinkParams;

    fn annotations() -> ToolAnnotations {
        ToolAnnotations::new()
            .read_only(false)
            .destructive(false)
            .idempotent(false)
            .open_world(true)
    }

    async fn run(params: UploadLinkParams, client: &AnythingLlmClient) -> ApiResult<String> {
        if !(params.link.starts_with("http://") || params.link.starts_with("https://")) {
            return Err(ApiError::validation("Link must start with http:// or https://"));
        }

        client
            .post("/document/upload-link", json!({ "link": params.link }))
            .await?
            .into_pretty_string()
    }
}
