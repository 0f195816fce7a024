//! Raw text upload tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::mutating;

/// Parameters for storing raw text as a document.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UploadRawTextParams {
    /// Text content of the document.
    pub text_content: String,

    /// Document title.
    pub title: String,
}

/// Raw text upload tool - calls `POST /document/raw-text`.
pub struct UploadRawTextTool;

#[async_trait]
impl ToolDefinition for UploadRawTextTool {
    const NAME: &'static str = "anythingllm_upload_raw_text";
    const DESCRIPTION: &'static str = "Store raw text as a new document in AnythingLLM.";

    type Params = UploadRawTextParams;

    fn annotations() -> ToolAnnotations {
        mutating(false, false)
    }

    async fn run(params: UploadRawTextParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let body = json!({
            "textContent": params.text_content,
            "metadata": { "title": params.title },
        });
        client
            .post("/document/raw-text", body)
            .await?
            .into_pretty_string()
    }
}
