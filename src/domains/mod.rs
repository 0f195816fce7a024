//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each tool group under `tools::definitions`
//! maps to one area of the AnythingLLM API.

pub mod tools;
