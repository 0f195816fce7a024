//! Workspace settings update tool.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::api::{AnythingLlmClient, ApiError, ApiResult, path_segment, validate_range};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{ChatMode, mutating};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for updating a workspace. Only supplied settings are sent.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct UpdateWorkspaceParams {
    /// Workspace slug to update.
    pub slug: String,

    /// New workspace name.
    #[serde(default)]
    pub name: Option<String>,

    /// LLM temperature (0.0-1.0).
    #[serde(default, rename = "openAiTemp")]
    pub open_ai_temp: Option<f64>,

    /// Chat history length (0-100).
    #[serde(default, rename = "openAiHistory")]
    pub open_ai_history: Option<i64>,

    /// System prompt override.
    #[serde(default, rename = "openAiPrompt")]
    pub open_ai_prompt: Option<String>,

    /// Similarity threshold (0.0-1.0).
    #[serde(default, rename = "similarityThreshold")]
    pub similarity_threshold: Option<f64>,

    /// Top N results for context (1-20).
    #[serde(default, rename = "topN")]
    pub top_n: Option<i64>,

    /// Chat mode: 'chat' or 'query'.
    #[serde(default, rename = "chatMode")]
    pub chat_mode: Option<ChatMode>,
}

/// Request body: the supplied settings, keyed as AnythingLLM expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_ai_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_ai_history: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_ai_prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    similarity_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_n: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chat_mode: Option<ChatMode>,
}

impl UpdateWorkspaceParams {
    fn validate(&self) -> ApiResult<()> {
        if let Some(temp) = self.open_ai_temp {
            validate_range("openAiTemp", temp, 0.0, 1.0)?;
        }
        if let Some(history) = self.open_ai_history {
            validate_range("openAiHistory", history, 0, 100)?;
        }
        if let Some(threshold) = self.similarity_threshold {
            validate_range("similarityThreshold", threshold, 0.0, 1.0)?;
        }
        if let Some(top_n) = self.top_n {
            validate_range("topN", top_n, 1, 20)?;
        }
        Ok(())
    }

    fn updates(&self) -> Option<WorkspaceUpdate<'_>> {
        let update = WorkspaceUpdate {
            name: self.name.as_deref(),
            open_ai_temp: self.open_ai_temp,
            open_ai_history: self.open_ai_history,
            open_ai_prompt: self.open_ai_prompt.as_deref(),
            similarity_threshold: self.similarity_threshold,
            top_n: self.top_n,
            chat_mode: self.chat_mode,
        };
        let empty = update.name.is_none()
            && update.open_ai_temp.is_none()
            && update.open_ai_history.is_none()
            && update.open_ai_prompt.is_none()
            && update.similarity_threshold.is_none()
            && update.top_n.is_none()
            && update.chat_mode.is_none();
        (!empty).then_some(update)
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Workspace update tool - calls `POST /workspace/{slug}/update`.
pub struct UpdateWorkspaceTool;

#[async_trait]
impl ToolDefinition for UpdateWorkspaceTool {
    const NAME: &'static str = "anythingllm_update_workspace";
    const DESCRIPTION: &'static str = "Update workspace settings (name, temperature, prompt, similarity threshold, etc.).";

    type Params = UpdateWorkspaceParams;

    fn annotations() -> ToolAnnotations {
        mutating(false, true)
    }

    async fn run(params: UpdateWorkspaceParams, client: &AnythingLlmClient) -> ApiResult<String> {
        params.validate()?;
        let slug = path_segment("slug", &params.slug)?;
        let updates = params
            .updates()
            .ok_or_else(|| ApiError::config("No updates provided."))?;
        let body = serde_json::to_value(&updates)?;
        debug!("Updating workspace '{}' with {}", params.slug, body);

        client
            .post(&format!("/workspace/{}/update", slug), body)
            .await?
            .into_pretty_string()
    }
}
