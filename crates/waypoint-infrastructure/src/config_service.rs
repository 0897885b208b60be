//! Configuration service implementation.
//!
//! Loads [`RootConfig`] from `config.toml` and applies environment
//! overrides. A missing file is not an error; defaults are used instead.

use std::path::{Path, PathBuf};
use waypoint_core::config::RootConfig;
use waypoint_core::{Result, WaypointError};

use crate::paths::{ServiceType, WaypointPaths};

pub const BASE_URL_ENV: &str = "WAYPOINT_BASE_URL";
pub const MODEL_ENV: &str = "WAYPOINT_MODEL";
pub const TIMEOUT_ENV: &str = "WAYPOINT_TIMEOUT_SECS";

/// Loads the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading `config.toml` from the resolved config dir.
    pub fn new(paths: &WaypointPaths) -> Result<Self> {
        Ok(Self {
            path: paths.get_path(ServiceType::Config)?,
        })
    }

    /// Creates a service reading an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file (or defaults) and applies process environment overrides.
    pub fn load(&self) -> Result<RootConfig> {
        let mut config = self.load_file()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Loads the file only, without environment overrides.
    pub fn load_file(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            WaypointError::config(format!(
                "Failed to read configuration file at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            WaypointError::config(format!(
                "Failed to parse configuration file at {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Applies `WAYPOINT_*` overrides read through `lookup`.
pub fn apply_env_overrides(
    config: &mut RootConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.completion.base_url = base_url;
    }
    if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
        config.completion.model = model;
    }
    if let Some(timeout) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
        let secs = timeout.trim().parse::<u64>().map_err(|_| {
            WaypointError::config(format!(
                "{TIMEOUT_ENV} must be a whole number of seconds, got '{timeout}'"
            ))
        })?;
        config.completion.request_timeout_secs = Some(secs);
    }
    Ok(())
}
