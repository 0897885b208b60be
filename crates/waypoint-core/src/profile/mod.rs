//! Agent profile domain module.
//!
//! This module contains the learning agent persona models, the starter
//! roster, form-style creation requests and a caller-owned roster.
//!
//! # Module Structure
//!
//! - `model`: Core profile models (`AgentProfile`, `AgentRole`, `LearningPreferences`)
//! - `preset`: Starter profiles shown before the user adds their own
//! - `request`: Create/edit request coming from a form
//! - `roster`: In-memory roster owned by the caller
//!
//! # Usage
//!
//! ```ignore
//! use waypoint_core::profile::{AgentProfile, AgentRole, Roster, get_default_presets};
//! ```

mod model;
mod preset;
pub mod request;
mod roster;

// Re-export public API
pub use model::{AgentProfile, AgentRole, LearningPreferences};
pub use preset::get_default_presets;
pub use request::{CreateProfileRequest, parse_tag_list};
pub use roster::Roster;
