//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, startup errors, the AnythingLLM API client, the server
//! handler and the transport layer.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use api::{AnythingLlmClient, ApiError, ApiResult};
pub use config::{ApiConfig, Config, LoggingConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
