//! Learning journey models.
//!
//! Field names follow the camelCase wire format the completion endpoint is
//! asked to produce. Only the top-level shape is enforced (see
//! `validation`); every field is read through the tolerant helpers in
//! `lenient`, so partial or mistyped inner items survive until URL
//! sanitization. Tags outside the known sets are kept verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Kind of learning resource.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    Video,
    Website,
    Printable,
    Activity,
    Experience,
    /// Any tag outside the known set, as sent
    Other(String),
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Video => "video",
            ResourceType::Website => "website",
            ResourceType::Printable => "printable",
            ResourceType::Activity => "activity",
            ResourceType::Experience => "experience",
            ResourceType::Other(tag) => tag,
        }
    }
}

impl From<String> for ResourceType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "video" => ResourceType::Video,
            "website" => ResourceType::Website,
            "printable" => ResourceType::Printable,
            "activity" => ResourceType::Activity,
            "experience" => ResourceType::Experience,
            _ => ResourceType::Other(tag),
        }
    }
}

impl From<ResourceType> for String {
    fn from(kind: ResourceType) -> Self {
        match kind {
            ResourceType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty of a learning resource.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Other(tag) => tag,
        }
    }
}

impl From<String> for Difficulty {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            "advanced" => Difficulty::Advanced,
            _ => Difficulty::Other(tag),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::opt_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<ResourceType>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    /// Only allow-listed URLs survive sanitization
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<Difficulty>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub required_materials: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub offline_access: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub adaptations: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CulturalConnection {
    #[serde(default, deserialize_with = "lenient::string")]
    pub topic: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub activities: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTracking {
    #[serde(deserialize_with = "lenient::string_list")]
    pub milestones: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub assessment_methods: Vec<String>,
}

/// A validated, URL-sanitized learning plan.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningJourney {
    /// Identifier echoed back by some models; never required
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub objectives: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub target_audience: Vec<String>,
    #[serde(deserialize_with = "lenient::items")]
    pub resources: Vec<LearningResource>,
    #[serde(deserialize_with = "lenient::items")]
    pub activities: Vec<Activity>,
    #[serde(deserialize_with = "lenient::items")]
    pub cultural_connections: Vec<CulturalConnection>,
    pub progress_tracking: ProgressTracking,
}

impl LearningJourney {
    /// Wire representation, as accepted by [`super::validate_journey`].
    pub fn to_value(&self) -> serde_json::Value {
        // Serializing plain structs of strings, vectors and options cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_tags_are_kept_verbatim() {
        let resource: LearningResource = serde_json::from_value(json!({
            "type": "podcast",
            "title": "Ep 1",
            "difficulty": "expert"
        }))
        .unwrap();
        assert_eq!(resource.kind, Some(ResourceType::Other("podcast".to_string())));
        assert_eq!(resource.difficulty, Some(Difficulty::Other("expert".to_string())));

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["type"], "podcast");
        assert_eq!(value["difficulty"], "expert");
    }

    #[test]
    fn test_known_tags_parse() {
        let resource: LearningResource =
            serde_json::from_value(json!({"type": "video", "difficulty": "beginner"})).unwrap();
        assert_eq!(resource.kind, Some(ResourceType::Video));
        assert_eq!(resource.difficulty, Some(Difficulty::Beginner));
        assert_eq!(ResourceType::Video.to_string(), "video");
    }

    #[test]
    fn test_missing_type_stays_absent() {
        let resource: LearningResource = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert!(resource.kind.is_none());
        assert!(serde_json::to_value(&resource).unwrap().get("type").is_none());
    }

    #[test]
    fn test_mistyped_inner_fields_are_tolerated() {
        let activity: Activity = serde_json::from_value(json!({
            "title": null,
            "duration": null,
            "steps": "Just one step",
            "adaptations": [null, "Large print"]
        }))
        .unwrap();
        assert_eq!(activity.title, "");
        assert_eq!(activity.duration, "");
        assert_eq!(activity.steps, vec!["Just one step"]);
        assert_eq!(activity.adaptations, vec!["Large print"]);
    }

    #[test]
    fn test_resource_serializes_without_absent_optionals() {
        let resource = LearningResource {
            kind: Some(ResourceType::Video),
            title: "Intro".to_string(),
            description: "Short intro".to_string(),
            offline_access: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["type"], "video");
        assert_eq!(value["offlineAccess"], true);
        assert!(value.get("url").is_none());
        assert!(value.get("requiredMaterials").is_none());
    }
}
