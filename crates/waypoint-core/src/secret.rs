//! Secret management service trait.
//!
//! Defines the interface for loading the completion endpoint credential.

use crate::config::SecretConfig;
use crate::error::Result;

/// Service for loading secret configuration.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Secrets are never logged or exposed in error messages
/// - Secrets are loaded from configuration or the environment, never from source
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    async fn load_secrets(&self) -> Result<SecretConfig>;

    /// Resolves the completion API key.
    ///
    /// A missing key is a `Config` error raised at startup, before any
    /// generation request is attempted.
    async fn completion_api_key(&self) -> Result<String>;
}
