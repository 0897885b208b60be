//! Unified path management for waypoint configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/waypoint/          # Config directory (platform config dir)
//! ├── config.toml              # Endpoint settings
//! └── secret.json              # API key
//! ```

use std::path::{Path, PathBuf};
use waypoint_core::WaypointError;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform configuration directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for WaypointError {
    fn from(err: PathError) -> Self {
        WaypointError::config(err.to_string())
    }
}

/// Files managed under the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// `config.toml`
    Config,
    /// `secret.json`
    Secret,
}

impl ServiceType {
    fn file_name(&self) -> &'static str {
        match self {
            ServiceType::Config => "config.toml",
            ServiceType::Secret => "secret.json",
        }
    }
}

/// Resolves waypoint file locations, optionally under a custom base directory.
#[derive(Debug, Clone, Default)]
pub struct WaypointPaths {
    base: Option<PathBuf>,
}

impl WaypointPaths {
    /// `None` uses the platform config directory (e.g. `~/.config/waypoint/`).
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the waypoint configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("waypoint"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of a managed file.
    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(service.file_name()))
    }
}
