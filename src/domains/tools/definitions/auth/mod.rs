//! Authentication tools.

pub mod check;

pub use check::CheckAuthTool;
