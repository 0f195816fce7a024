//! Tools domain module.
//!
//! Every AnythingLLM operation is exposed as an MCP tool.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder shared by every transport
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` group
//! 2. Define the params struct and implement `ToolDefinition`
//! 3. Export it in `definitions/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`

pub mod definitions;
pub mod router;

pub use definitions::ToolDefinition;
pub use router::build_tool_router;
