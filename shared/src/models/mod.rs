//! Data models
//!
//! Serialized as the template JSON documents the editor persists.

pub mod label_template;

// Re-exports
pub use label_template::*;
