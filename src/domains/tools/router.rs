//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only lists them
//! and hands every route the shared AnythingLLM client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::api::AnythingLlmClient;

use super::definitions::{
    AcceptedFileTypesTool, ChatHistoryTool, ChatInThreadTool, ChatTool, CheckAuthTool,
    CreateThreadTool, CreateWorkspaceTool, DeleteThreadTool, DeleteWorkspaceTool,
    ExportChatsTool, GetWorkspaceTool, ListDocumentsTool, ListEmbedsTool, ListModelsTool,
    ListWorkspacesTool, SearchTool, SystemSettingsTool, ThreadChatsTool, ToolDefinition,
    UpdateEmbeddingsTool, UpdateWorkspaceTool, UploadLinkTool, UploadRawTextTool,
    VectorCountTool,
};

/// Build the tool router with all AnythingLLM tools.
pub fn build_tool_router<S>(client: Arc<AnythingLlmClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        // Auth
        .with_route(CheckAuthTool::create_route(client.clone()))
        // Workspaces
        .with_route(ListWorkspacesTool::create_route(client.clone()))
        .with_route(GetWorkspaceTool::create_route(client.clone()))
        .with_route(CreateWorkspaceTool::create_route(client.clone()))
        .with_route(UpdateWorkspaceTool::create_route(client.clone()))
        .with_route(DeleteWorkspaceTool::create_route(client.clone()))
        .with_route(ChatTool::create_route(client.clone()))
        .with_route(ChatHistoryTool::create_route(client.clone()))
        // Threads
        .with_route(CreateThreadTool::create_route(client.clone()))
        .with_route(DeleteThreadTool::create_route(client.clone()))
        .with_route(ChatInThreadTool::create_route(client.clone()))
        .with_route(ThreadChatsTool::create_route(client.clone()))
        // Documents
        .with_route(ListDocumentsTool::create_route(client.clone()))
        .with_route(AcceptedFileTypesTool::create_route(client.clone()))
        .with_route(UploadLinkTool::create_route(client.clone()))
        .with_route(UploadRawTextTool::create_route(client.clone()))
        .with_route(UpdateEmbeddingsTool::create_route(client.clone()))
        // Search
        .with_route(SearchTool::create_route(client.clone()))
        // System
        .with_route(SystemSettingsTool::create_route(client.clone()))
        .with_route(VectorCountTool::create_route(client.clone()))
        .with_route(ExportChatsTool::create_route(client.clone()))
        .with_route(ListEmbedsTool::create_route(client.clone()))
        .with_route(ListModelsTool::create_route(client))
}
