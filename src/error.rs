//! Error types for Tortoise
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while pulling, transforming or detecting
#[derive(Debug, Error)]
pub enum TortoiseError {
    /// A transition was handed a token outside its alphabet
    #[error("Malformed transition: token {token:?} is not part of the alphabet")]
    MalformedTransition { token: String },

    /// The algorithm needs a capability the producer does not offer
    #[error("Unsupported capability: {algorithm} requires a {capability} sequence")]
    UnsupportedCapability {
        algorithm: String,
        capability: String,
    },

    /// A caller-imposed step budget ran out before a verdict was reached
    #[error("Undetermined: no verdict within {budget} reads")]
    Undetermined { budget: usize },

    /// Algorithm name not recognized
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Position literal could not be parsed
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Board diagram could not be parsed
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Tortoise operations
pub type Result<T> = std::result::Result<T, TortoiseError>;
