//! Document tools module.
//!
//! Uploading, listing and embedding documents into workspaces.

pub mod embeddings;
pub mod file_types;
pub mod list;
pub mod raw_text;
pub mod upload_link;

pub use embeddings::{UpdateEmbeddingsParams, UpdateEmbeddingsTool};
pub use file_types::AcceptedFileTypesTool;
pub use list::ListDocumentsTool;
pub use raw_text::{UploadRawTextParams, UploadRawTextTool};
pub use upload_link::{UploadLinkParams, UploadLinkTool};
