//! bitramp Common Utilities
//!
//! Shared infrastructure for all bitramp crates:
//! - Error types and result aliases
//! - Curve and logging configuration
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
