//! Agent profile creation and update request models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AgentProfile, AgentRole, LearningPreferences};
use crate::error::{Result, WaypointError};

/// Splits a comma-separated form field into trimmed tags.
///
/// Empty segments are dropped, so `"Art, , Music,"` yields `["Art", "Music"]`.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Request to create or edit an agent profile.
///
/// This is the form-shaped model: tag fields arrive as comma-separated
/// text and are split with [`parse_tag_list`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    /// Display name (required)
    pub name: String,

    /// Role in the learning group
    #[serde(default)]
    pub role: AgentRole,

    /// Comma-separated interests
    #[serde(default)]
    pub interests: String,

    /// Comma-separated strengths
    #[serde(default)]
    pub strengths: String,

    /// Learning style
    #[serde(default)]
    pub learning_style: String,

    /// Communication style
    #[serde(default)]
    pub communication_style: String,

    /// Comma-separated expertise
    #[serde(default)]
    pub expertise: String,

    /// Optional avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl CreateProfileRequest {
    /// Validate the request and return errors if any.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WaypointError::InvalidProfile(
                "Name is required and cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn preferences(&self) -> LearningPreferences {
        LearningPreferences {
            learning_style: self.learning_style.trim().to_string(),
            communication_style: self.communication_style.trim().to_string(),
            expertise: parse_tag_list(&self.expertise),
        }
    }

    /// Convert this request into a profile, always generating a new id.
    pub fn into_profile(self) -> Result<AgentProfile> {
        self.validate()?;

        Ok(AgentProfile {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            role: self.role,
            interests: parse_tag_list(&self.interests),
            strengths: parse_tag_list(&self.strengths),
            preferences: self.preferences(),
            avatar: self.avatar,
        })
    }

    /// Apply this request to an existing profile, keeping its id.
    pub fn apply_to(&self, profile: &AgentProfile) -> Result<AgentProfile> {
        self.validate()?;

        Ok(AgentProfile {
            id: profile.id.clone(),
            name: self.name.trim().to_string(),
            role: self.role,
            interests: parse_tag_list(&self.interests),
            strengths: parse_tag_list(&self.strengths),
            preferences: self.preferences(),
            avatar: self.avatar.clone().or_else(|| profile.avatar.clone()),
        })
    }

    /// Create a request from an existing profile (for editing).
    pub fn from_profile(profile: &AgentProfile) -> Self {
        Self {
            name: profile.name.clone(),
            role: profile.role,
            interests: profile.interests.join(", "),
            strengths: profile.strengths.join(", "),
            learning_style: profile.preferences.learning_style.clone(),
            communication_style: profile.preferences.communication_style.clone(),
            expertise: profile.preferences.expertise.join(", "),
            avatar: profile.avatar.clone(),
        }
    }
}
