//! Vector search tools module.

pub mod vector;

pub use vector::{SearchParams, SearchTool};
