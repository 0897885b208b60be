//! Agent profile domain model.
//!
//! Represents the learning agent personas that participate in a journey.
//! Each profile has a role, interest and strength tags, and learning
//! preferences that are enumerated into the generation prompt.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Role a learning agent plays in the group.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentRole {
    Teacher,
    #[default]
    Student,
    Facilitator,
    LearningSpecialist,
}

impl AgentRole {
    /// Human readable label, e.g. "Learning Specialist".
    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::Teacher => "Teacher",
            AgentRole::Student => "Student",
            AgentRole::Facilitator => "Facilitator",
            AgentRole::LearningSpecialist => "Learning Specialist",
        }
    }
}

/// How an agent prefers to learn and communicate.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPreferences {
    /// Learning style, e.g. "Visual-Spatial"
    #[serde(default)]
    pub learning_style: String,
    /// Communication style, e.g. "Direct and Creative"
    #[serde(default)]
    pub communication_style: String,
    /// Areas of expertise
    #[serde(default)]
    pub expertise: Vec<String>,
}

/// A learning agent persona.
///
/// Profiles are owned by the caller's roster. The generation pipeline only
/// borrows them for the duration of one request.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    /// Opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Role in the learning group
    pub role: AgentRole,
    /// Interest tags
    #[serde(default)]
    pub interests: Vec<String>,
    /// Strength tags
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Learning and communication preferences
    #[serde(default)]
    pub preferences: LearningPreferences,
    /// Avatar image URL for UI collaborators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&AgentRole::LearningSpecialist).unwrap(),
            "\"learning_specialist\""
        );
        assert_eq!(AgentRole::LearningSpecialist.to_string(), "learning_specialist");
        assert_eq!(AgentRole::from_str("facilitator").unwrap(), AgentRole::Facilitator);
        assert!(AgentRole::from_str("principal").is_err());
    }

    #[test]
    fn test_role_defaults_to_student() {
        assert_eq!(AgentRole::default(), AgentRole::Student);

        let profile: AgentProfile =
            serde_json::from_str(r#"{"id": "a", "name": "Ana", "role": "student"}"#).unwrap();
        assert_eq!(profile.role, AgentRole::default());
    }

    #[test]
    fn test_profile_deserializes_camel_case_preferences() {
        let json = r#"{
            "id": "student-1",
            "name": "Alex Rivera",
            "role": "student",
            "interests": ["Art"],
            "strengths": ["Digital Skills"],
            "preferences": {
                "learningStyle": "Visual-Spatial",
                "communicationStyle": "Direct",
                "expertise": ["Programming"]
            }
        }"#;

        let profile: AgentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, AgentRole::Student);
        assert_eq!(profile.preferences.learning_style, "Visual-Spatial");
        assert_eq!(profile.preferences.expertise, vec!["Programming"]);
        assert!(profile.avatar.is_none());
    }
}
