//! Workspace thread tools module.
//!
//! Threads are sub-conversations within a workspace, each with its own
//! chat history.

pub mod chat;
pub mod chats;
pub mod create;
pub mod delete;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiResult, path_segment};

pub use chat::{ChatInThreadTool, ThreadChatParams};
pub use chats::ThreadChatsTool;
pub use create::{CreateThreadParams, CreateThreadTool};
pub use delete::DeleteThreadTool;

/// Parameters addressing one thread of a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThreadParams {
    /// Workspace slug.
    pub slug: String,

    /// Thread slug.
    pub thread_slug: String,
}

impl ThreadParams {
    fn path(&self) -> ApiResult<String> {
        Ok(format!(
            "/workspace/{}/thread/{}",
            path_segment("slug", &self.slug)?,
            path_segment("thread_slug", &self.thread_slug)?
        ))
    }
}
