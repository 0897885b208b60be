//! Waypoint core: learning agent profiles and the journey generation pipeline.
//!
//! The pipeline turns a scenario description and a list of agent profiles
//! into one completion request, then extracts, validates and sanitizes the
//! returned learning journey. See [`generator::JourneyGenerator`].

pub mod completion;
pub mod config;
pub mod conversation;
pub mod error;
pub mod generator;
pub mod journey;
pub mod profile;
pub mod prompt;
pub mod secret;

// Re-export common types
pub use completion::{CompletionClient, CompletionRequest};
pub use error::{Result, WaypointError};
pub use generator::{GenerationRequest, JourneyGenerator, interpret_completion};
pub use journey::LearningJourney;
pub use profile::AgentProfile;
