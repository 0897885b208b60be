//! Error types for the Waypoint journey pipeline.

use std::time::Duration;
use thiserror::Error;

/// A shared error type for the journey generation pipeline.
///
/// Every pipeline stage maps its failure onto exactly one variant, and every
/// variant is terminal for the current request. Nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaypointError {
    /// Transport failure or a non-success status from the completion endpoint
    #[error("Network error: {message}")]
    Network {
        /// HTTP status when the endpoint answered at all
        status: Option<u16>,
        message: String,
    },

    /// The endpoint answered successfully but carried no message content
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// No parseable JSON object could be recovered from the completion text
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The parsed object does not have the learning journey shape
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// The caller-supplied deadline elapsed before the endpoint answered
    #[error("Generation timed out after {}s", .after.as_secs_f64())]
    Timeout { after: Duration },

    /// Configuration error (missing credential, unreadable config file, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Agent profile form input was rejected
    #[error("Invalid agent profile: {0}")]
    InvalidProfile(String),
}

impl WaypointError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error without an HTTP status (transport failure)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Network error for a non-success HTTP status
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates an EmptyResponse error
    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::EmptyResponse(message.into())
    }

    /// Creates a MalformedResponse error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Creates a SchemaValidation error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaValidation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is an EmptyResponse error
    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse(_))
    }

    /// Check if this is a MalformedResponse error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// Check if this is a SchemaValidation error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::SchemaValidation(_))
    }

    /// Check if this is a Timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this is a Config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// HTTP status reported by the endpoint, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

/// A type alias for `Result<T, WaypointError>`.
pub type Result<T> = std::result::Result<T, WaypointError>;
