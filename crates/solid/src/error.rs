//! Error types for the demonstrations

use thiserror::Error;

/// Main error type for demonstration runs
#[derive(Error, Debug)]
pub enum SolidError {
    /// A type was asked for a capability it only pretends to have.
    ///
    /// This is the failure the violating examples exist to show.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Name that matches no demonstration in the catalog
    #[error("Unknown principle: {0}")]
    UnknownPrinciple(String),

    /// Writing demonstration output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SolidError {
    /// Create an unsupported-operation error.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported(reason.into())
    }

    /// True for the deliberate contract violations, false for plumbing failures.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Result type alias for demonstration operations
pub type Result<T> = std::result::Result<T, SolidError>;
