//! Caller-owned roster of agent profiles.
//!
//! The roster is plain data: the generation pipeline never holds on to it,
//! it only receives `roster.profiles()` as a slice per request.

use super::{AgentProfile, AgentRole, CreateProfileRequest};
use crate::error::{Result, WaypointError};

/// An ordered, in-memory collection of agent profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    profiles: Vec<AgentProfile>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster from existing profiles, keeping their order.
    pub fn from_profiles(profiles: Vec<AgentProfile>) -> Self {
        Self { profiles }
    }

    /// Creates a roster holding the starter presets.
    pub fn with_presets() -> Self {
        Self::from_profiles(super::get_default_presets())
    }

    pub fn profiles(&self) -> &[AgentProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AgentProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// First facilitator in roster order, if any.
    pub fn facilitator(&self) -> Option<&AgentProfile> {
        self.profiles
            .iter()
            .find(|p| p.role == AgentRole::Facilitator)
    }

    /// Adds a new profile built from a form request and returns it.
    pub fn add(&mut self, request: CreateProfileRequest) -> Result<&AgentProfile> {
        let profile = request.into_profile()?;
        self.profiles.push(profile);
        let index = self.profiles.len() - 1;
        Ok(&self.profiles[index])
    }

    /// Replaces the profile with the same id.
    pub fn update(&mut self, id: &str, request: &CreateProfileRequest) -> Result<&AgentProfile> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| WaypointError::InvalidProfile(format!("Unknown agent id '{}'", id)))?;

        let updated = request.apply_to(&self.profiles[index])?;
        self.profiles[index] = updated;
        Ok(&self.profiles[index])
    }

    /// Returns the profiles with the given ids, in roster order.
    ///
    /// Unknown ids are reported as `InvalidProfile`.
    pub fn select(&self, ids: &[String]) -> Result<Vec<AgentProfile>> {
        if let Some(missing) = ids.iter().find(|id| self.get(id).is_none()) {
            return Err(WaypointError::InvalidProfile(format!(
                "Unknown agent id '{}'",
                missing
            )));
        }

        Ok(self
            .profiles
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}
