//! Core types for the sidebar widget layout engine.
//!
//! This crate provides the foundational types used across the other sidebar crates:
//! - Keyword enums (widget kinds, sides, slots, device classes, layout modes)
//! - Widget definitions
//! - The process-wide layout configuration
//! - Error types

pub mod config;
pub mod errors;
pub mod types;
pub mod widget;

pub use config::*;
pub use errors::*;
pub use types::*;
pub use widget::*;
