//! AnythingLLM MCP Server Library
//!
//! This crate exposes the REST API of an AnythingLLM instance as Model
//! Context Protocol tools: workspaces, chats, threads, documents, vector
//! search and system administration.
//!
//! # Architecture
//!
//! - **core**: configuration, startup errors, the AnythingLLM API client
//!   (request dispatch and error normalization), the server handler and
//!   the transports
//! - **domains**: the tool catalogue, one file per tool
//!
//! Tool calls never fail at the protocol level because of an upstream
//! problem: every failure is rendered into an `Error: ...` text result.
//!
//! # Example
//!
//! ```rust,no_run
//! use anythingllm_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
