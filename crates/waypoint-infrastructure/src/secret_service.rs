//! Secret service implementation.
//!
//! Resolves the completion API key from `secret.json`, falling back to the
//! `WAYPOINT_API_KEY` environment variable.

use std::path::{Path, PathBuf};
use waypoint_core::config::SecretConfig;
use waypoint_core::secret::SecretService;
use waypoint_core::{Result, WaypointError};

use crate::paths::{ServiceType, WaypointPaths};

pub const API_KEY_ENV: &str = "WAYPOINT_API_KEY";

/// Secret service backed by `secret.json` and the environment.
///
/// Priority:
/// 1. `completion.api_key` in `secret.json`
/// 2. `WAYPOINT_API_KEY`
#[derive(Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
    env_api_key: Option<String>,
}

impl SecretServiceImpl {
    /// Creates a service for the resolved config dir, capturing the
    /// environment fallback at construction time.
    pub fn new(paths: &WaypointPaths) -> Result<Self> {
        Ok(Self::with_path(
            paths.get_path(ServiceType::Secret)?,
            std::env::var(API_KEY_ENV).ok(),
        ))
    }

    /// Creates a service with an explicit file and environment fallback.
    pub fn with_path(path: impl Into<PathBuf>, env_api_key: Option<String>) -> Self {
        Self {
            path: path.into(),
            env_api_key,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(SecretConfig::default());
        }

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            WaypointError::config(format!(
                "Failed to read secret file at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        // The parse error message never includes file contents.
        serde_json::from_str(&content).map_err(|e| {
            WaypointError::config(format!(
                "Failed to parse secret file at {} (line {}, column {})",
                self.path.display(),
                e.line(),
                e.column()
            ))
        })
    }

    async fn completion_api_key(&self) -> Result<String> {
        let secrets = self.load_secrets().await?;

        if let Some(key) = secrets
            .completion
            .map(|secret| secret.api_key)
            .filter(|key| !key.trim().is_empty())
        {
            tracing::debug!(source = "secret file", "Resolved completion API key");
            return Ok(key);
        }

        if let Some(key) = self.env_api_key.clone().filter(|key| !key.trim().is_empty()) {
            tracing::debug!(source = "environment", "Resolved completion API key");
            return Ok(key);
        }

        Err(WaypointError::config(format!(
            "No completion API key configured (set {} or add completion.api_key to {})",
            API_KEY_ENV,
            self.path.display()
        )))
    }
}
