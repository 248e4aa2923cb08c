//! Wavecrest Core Library
//!
//! This crate provides the shared foundation for the Wavecrest application
//! kit: error handling and application configuration.

pub mod config;
pub mod error;

pub use config::{AppConfig, ConfigLoader};
pub use error::{Error, Result};

/// Wavecrest version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
