//! Unified error types for Pinsweep

use thiserror::Error;

/// Unified error type for all Pinsweep operations
#[derive(Error, Debug)]
pub enum PinsweepError {
    // Surface errors
    #[error("Not a recognized product page: {0}")]
    NotTargetSurface(String),

    #[error("Agent injection failed: {0}")]
    Injection(String),

    #[error("Cannot access protected surface: {0}")]
    ProtectedSurface(String),

    // Agent transport errors
    #[error("Agent transport error: {0}")]
    Transport(String),

    // Run errors
    #[error("No valid locations specified")]
    NoValidLocations,

    #[error("A check is already in progress")]
    AlreadyRunning,

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Store errors
    #[error("Store error: {0}")]
    Storage(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using PinsweepError
pub type Result<T> = std::result::Result<T, PinsweepError>;
