//! Error types for Valentine proposals.

use thiserror::Error;

/// Main error type for Valentine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValentineError {
    /// Input validation failed.
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    /// Resource not found.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound { resource_type: String, id: String },

    /// The remote side answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Connection error.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A page state machine received an event it cannot handle in its current state.
    #[error("Invalid transition from {from} on {event}")]
    InvalidTransition { from: String, event: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ValentineError {
    /// Returns true if retrying the same operation later could succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ValentineError::ConnectionError(_) => true,
            ValentineError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValentineError::NotFound { .. })
    }

    /// Shorthand for a missing proposal.
    pub fn proposal_not_found(id: impl Into<String>) -> Self {
        ValentineError::NotFound {
            resource_type: "Proposal".to_string(),
            id: id.into(),
        }
    }

    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        ValentineError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience Result type for Valentine operations.
pub type Result<T> = std::result::Result<T, ValentineError>;

impl From<serde_json::Error> for ValentineError {
    fn from(err: serde_json::Error) -> Self {
        ValentineError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        assert!(ValentineError::ConnectionError("refused".into()).is_recoverable());
        assert!(ValentineError::Http { status: 503, message: String::new() }.is_recoverable());
        assert!(!ValentineError::Http { status: 400, message: String::new() }.is_recoverable());
        assert!(!ValentineError::proposal_not_found("zzz").is_recoverable());
    }

    #[test]
    fn test_not_found_display() {
        let err = ValentineError::proposal_not_found("zzz");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Resource not found: Proposal with id zzz");
    }
}
