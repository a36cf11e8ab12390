//! Error types for Usergrid

use thiserror::Error;

/// Core error type for Usergrid operations
///
/// Grid commands never fail; this type covers setting the grid up.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Usergrid operations
pub type Result<T> = std::result::Result<T, GridError>;
