//! Transport layer for the MCP server.
//!
//! This module provides two transport implementations:
//! - **STDIO**: Standard input/output (default for MCP clients) - feature: `stdio`
//! - **TCP**: Line-delimited JSON-RPC over a TCP socket - feature: `tcp`
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
