//! AnythingLLM REST API access.
//!
//! - `client.rs` - authenticated request dispatch and response decoding
//! - `error.rs` - failure classification and the user-facing messages
//! - `validation.rs` - argument checks and path encoding run before a request is sent

mod client;
mod error;
mod validation;

pub use client::{AnythingLlmClient, ApiRequest, ResponsePayload};
pub use error::{ApiError, ApiResult};
pub use validation::{path_segment, validate_range};
