//! Workspace vector search tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::api::{AnythingLlmClient, ApiResult, path_segment, validate_range};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::read_only;

const DEFAULT_TOP_N: i64 = 4;

fn default_top_n() -> i64 {
    DEFAULT_TOP_N
}

/// Parameters for a similarity search within a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Workspace slug to search in.
    pub slug: String,

    /// Search query.
    pub query: String,

    /// Number of results (1-20, default 4).
    #[serde(default = "default_top_n")]
    pub top_n: i64,

    /// Similarity score threshold (0-1). Lower returns more results.
    #[serde(default)]
    pub score_threshold: Option<f64>,
}

/// Vector search tool - calls `POST /workspace/{slug}/vector-search`.
pub struct SearchTool;

#[async_trait]
impl ToolDefinition for SearchTool {
    const NAME: &'static str = "anythingllm_search";
    const DESCRIPTION: &'static str =
        "Search for relevant document chunks within a workspace using vector similarity.";

    type Params = SearchParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(params: SearchParams, client: &AnythingLlmClient) -> ApiResult<String> {
        validate_range("top_n", params.top_n, 1, 20)?;
        let slug = path_segment("slug", &params.slug)?;
        let mut body = json!({ "query": params.query, "topN": params.top_n });
        if let Some(threshold) = params.score_threshold {
            validate_range("score_threshold", threshold, 0.0, 1.0)?;
            body["scoreThreshold"] = Value::from(threshold);
        }

        client
            .post(&format!("/workspace/{}/vector-search", slug), body)
            .await?
            .into_pretty_string()
    }
}
