//! Workspace tools module.
//!
//! Workspaces group documents, chat threads and retrieval settings:
//! - `list`, `get`, `create`, `update`, `delete`: workspace management
//! - `chat`: send a message to a workspace
//! - `history`: read a workspace's chat history

pub mod chat;
pub mod create;
pub mod delete;
pub mod get;
pub mod history;
pub mod list;
pub mod update;

pub use chat::{ChatParams, ChatTool};
pub use create::{CreateWorkspaceParams, CreateWorkspaceTool};
pub use delete::DeleteWorkspaceTool;
pub use get::{GetWorkspaceTool, WorkspaceSlugParams};
pub use history::{ChatHistoryParams, ChatHistoryTool};
pub use list::ListWorkspacesTool;
pub use update::{UpdateWorkspaceParams, UpdateWorkspaceTool};
