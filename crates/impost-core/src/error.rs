//! Error types for impost

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors crossing the settings-store boundary.
///
/// Never fatal: callers log the failure and fall back to default
/// settings, so a broken store degrades the engine to defaults instead
/// of taking it down.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be reached
    #[error("settings store unavailable: {0}")]
    Unavailable(String),

    /// A stored snapshot failed to deserialize
    #[error("settings snapshot corrupt: {0}")]
    Corrupt(String),
}
