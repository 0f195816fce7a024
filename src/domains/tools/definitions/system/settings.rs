//! System settings tool.
//!
//! `/system` returns the full instance configuration, which includes
//! provider credentials. Only an explicit allow-list of keys is forwarded.

use async_trait::async_trait;
use rmcp::model::ToolAnnotations;
use serde_json::{Map, Value, json};

use crate::core::api::{AnythingLlmClient, ApiResult};
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::definitions::common::{EmptyParams, read_only};

const SYSTEM_ENDPOINT: &str = "/system";

/// Settings keys safe to expose to clients.
pub const SAFE_SETTING_KEYS: [&str; 12] = [
    "LLMProvider",
    "LLMModel",
    "VectorDB",
    "EmbeddingEngine",
    "EmbeddingModelPref",
    "EmbeddingModelMaxChunkLength",
    "MultiUserMode",
    "DisableTelemetry",
    "WhisperProvider",
    "TextToSpeechProvider",
    "OllamaLLMBasePath",
    "OllamaLLMModelPref",
];

/// System settings tool - calls `GET /system`.
pub struct SystemSettingsTool;

#[async_trait]
impl ToolDefinition for SystemSettingsTool {
    const NAME: &'static str = "anythingllm_get_system_settings";
    const DESCRIPTION: &'static str =
        "Get AnythingLLM system settings (LLM provider, vector DB, embeddings, etc.).";

    type Params = EmptyParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: EmptyParams, client: &AnythingLlmClient) -> ApiResult<String> {
        let response = client
            .get(SYSTEM_ENDPOINT)
            .await?
            .into_object(SYSTEM_ENDPOINT)?;

        let filtered = match response.get("settings") {
            Some(Value::Object(settings)) => filter_settings(settings),
            _ => Map::new(),
        };

        Ok(serde_json::to_string_pretty(&json!({ "settings": filtered }))?)
    }
}

/// Keep allow-listed keys with non-null values.
fn filter_settings(settings: &Map<String, Value>) -> Map<String, Value> {
    SAFE_SETTING_KEYS
        .iter()
        .filter_map(|key| match settings.get(*key) {
            Some(Value::Null) | None => None,
            Some(value) => Some((key.to_string(), value.clone())),
        })
        .collect()
}
