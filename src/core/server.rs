//! MCP Server implementation.
//!
//! The server owns the configuration, one shared AnythingLLM client and the
//! tool router. Tools are defined in `domains/tools/definitions/` and the
//! router is built in `domains/tools/router.rs`, so adding a tool does not
//! touch this file.

use std::sync::Arc;

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use tracing::info;

use super::api::AnythingLlmClient;
use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::build_tool_router;

const INSTRUCTIONS: &str = "MCP server for AnythingLLM. Provides workspace management, chat, \
document handling, embedding, and system administration tools. All tools require a running \
AnythingLLM instance.";

/// The main MCP server handler.
///
/// Cloning is cheap: every clone shares the same client and router, which
/// is how the TCP transport serves concurrent sessions.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared AnythingLLM client.
    client: Arc<AnythingLlmClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the AnythingLLM client cannot be built, e.g. when the
    /// base URL does not parse. A missing API key is not fatal here.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let client = Arc::new(AnythingLlmClient::new(config.api.clone())?);

        info!(
            "AnythingLLM endpoint: {} (timeout {}s)",
            client.base_url(),
            config.api.timeout_secs
        );

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared AnythingLLM client.
    pub fn client(&self) -> &Arc<AnythingLlmClient> {
        &self.client
    }

    /// Tools advertised to clients.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    fn config() -> Config {
        let mut config = Config::default();
        config.server.name = "llm-bridge".to_string();
        config.api = ApiConfig::new("http://localhost:3001", "k");
        config
    }

    #[test]
    fn test_server_info() {
        let server = McpServer::new(config()).unwrap();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "llm-bridge");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().starts_with("MCP server for AnythingLLM."));
    }

    #[test]
    fn test_server_lists_all_tools() {
        let server = McpServer::new(config()).unwrap();
        assert_eq!(server.list_tools().len(), 23);
    }

    #[test]
    fn test_server_starts_without_key() {
        let mut config = config();
        config.api = ApiConfig::default();
        let server = McpServer::new(config).unwrap();
        assert!(!server.client().has_api_key());
    }

    #[test]
    fn test_invalid_base_url_is_fatal() {
        let mut config = config();
        config.api = ApiConfig::new("not a url", "k");
        assert!(McpServer::new(config).is_err());
    }
}
