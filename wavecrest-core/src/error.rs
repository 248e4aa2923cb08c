//! Error types for Wavecrest

use thiserror::Error;

/// Result type for Wavecrest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Wavecrest
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Plugin error
    #[error("Plugin error: {0}")]
    Plugin(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
