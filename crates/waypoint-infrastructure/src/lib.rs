//! Waypoint infrastructure: configuration and secret loading from disk and
//! the environment.

pub mod config_service;
pub mod paths;
pub mod secret_service;

pub use config_service::ConfigService;
pub use paths::{PathError, ServiceType, WaypointPaths};
pub use secret_service::SecretServiceImpl;
