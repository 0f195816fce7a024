//! System tools module.
//!
//! Instance-wide administration: settings, vector statistics, chat export,
//! embed widgets and the OpenAI-compatible model list.

pub mod embeds;
pub mod export;
pub mod models;
pub mod settings;
pub mod vector_count;

pub use embeds::ListEmbedsTool;
pub use export::ExportChatsTool;
pub use models::ListModelsTool;
pub use settings::SystemSettingsTool;
pub use vector_count::VectorCountTool;
