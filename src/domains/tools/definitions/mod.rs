//! Tool definitions module.
//!
//! Each tool lives in its own file and implements [`ToolDefinition`]:
//! - name, description and parameter type
//! - side-effect annotations
//! - `run()` (core logic, one AnythingLLM call)
//!
//! The trait provides the MCP metadata, the route and the error rendering,
//! so a tool file only holds what is specific to that tool.

pub mod auth;
pub mod common;
pub mod document;
pub mod search;
pub mod system;
pub mod thread;
pub mod workspace;

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::core::api::{AnythingLlmClient, ApiResult};

use common::{error_result, success_result};

pub use auth::CheckAuthTool;
pub use document::{
    AcceptedFileTypesTool, ListDocumentsTool, UpdateEmbeddingsTool, UploadLinkTool,
    UploadRawTextTool,
};
pub use search::SearchTool;
pub use system::{
    ExportChatsTool, ListEmbedsTool, ListModelsTool, SystemSettingsTool, VectorCountTool,
};
pub use thread::{ChatInThreadTool, CreateThreadTool, DeleteThreadTool, ThreadChatsTool};
pub use workspace::{
    ChatHistoryTool, ChatTool, CreateWorkspaceTool, DeleteWorkspaceTool, GetWorkspaceTool,
    ListWorkspacesTool, UpdateWorkspaceTool,
};

/// Trait for tool definitions.
///
/// Every AnythingLLM tool implements this trait. `run` performs the work and
/// may fail; `execute` never does: failures become the normalized error text
/// of the result.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Side-effect hints advertised to clients.
    fn annotations() -> ToolAnnotations;

    /// Execute the tool logic against AnythingLLM.
    async fn run(params: Self::Params, client: &AnythingLlmClient) -> ApiResult<String>;

    /// Execute the tool and render the outcome as a text result.
    async fn execute(params: Self::Params, client: &AnythingLlmClient) -> CallToolResult {
        info!("Tool called: {}", Self::NAME);
        match Self::run(params, client).await {
            Ok(text) => success_result(text),
            Err(e) => {
                let message = e.user_message();
                warn!("{} failed ({}): {}", Self::NAME, e.kind(), message);
                error_result(&message)
            }
        }
    }

    /// Decode MCP call arguments and execute the tool.
    ///
    /// Arguments that do not match `Params` (missing field, wrong type,
    /// unknown enum value) are a protocol error; everything after decoding
    /// ends up in the text result.
    async fn call(
        arguments: Option<JsonObject>,
        client: &AnythingLlmClient,
    ) -> Result<CallToolResult, McpError> {
        let params: Self::Params =
            serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default()))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(Self::execute(params, client).await)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<Self::Params>(),
        )
        .annotate(Self::annotations())
    }

    /// Create a ToolRoute for the MCP runtime.
    fn create_route<S>(client: Arc<AnythingLlmClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
        Self: Sized,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let arguments = ctx.arguments.clone();
            let client = client.clone();
            async move { Self::call(arguments, &client).await }.boxed()
        })
    }
}
