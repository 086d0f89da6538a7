//! Shared types for the label engine
//!
//! Data model of label templates as stored and exchanged with the editor.

pub mod models;
