//! Shape validation of a parsed journey document.
//!
//! The check is intentionally shallow: it looks at presence and container
//! type of the top-level fields, not at the contents of individual
//! resources or activities. Anything that passes is converted into
//! [`LearningJourney`] with tolerant field readers, so `null` or mistyped
//! inner values never reject a document.

use serde_json::{Map, Value};

use super::model::LearningJourney;
use crate::error::{Result, WaypointError};

const REQUIRED_STRINGS: [&str; 2] = ["title", "description"];
const REQUIRED_LISTS: [&str; 4] = [
    "objectives",
    "resources",
    "activities",
    "culturalConnections",
];
const PROGRESS_LISTS: [&str; 2] = ["milestones", "assessmentMethods"];

fn require_string(object: &Map<String, Value>, field: &str, path: &str) -> Result<()> {
    match object.get(field) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(WaypointError::schema(format!("`{path}{field}` must be a string"))),
        None => Err(WaypointError::schema(format!("`{path}{field}` is missing"))),
    }
}

fn require_list(object: &Map<String, Value>, field: &str, path: &str) -> Result<()> {
    match object.get(field) {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(WaypointError::schema(format!("`{path}{field}` must be a list"))),
        None => Err(WaypointError::schema(format!("`{path}{field}` is missing"))),
    }
}

fn check_shape(value: &Value) -> Result<()> {
    let journey = value
        .as_object()
        .ok_or_else(|| WaypointError::schema("journey must be a JSON object"))?;

    for field in REQUIRED_STRINGS {
        require_string(journey, field, "")?;
    }
    for field in REQUIRED_LISTS {
        require_list(journey, field, "")?;
    }

    let progress = match journey.get("progressTracking") {
        Some(Value::Object(progress)) => progress,
        Some(_) => {
            return Err(WaypointError::schema(
                "`progressTracking` must be an object",
            ));
        }
        None => return Err(WaypointError::schema("`progressTracking` is missing")),
    };
    for field in PROGRESS_LISTS {
        require_list(progress, field, "progressTracking.")?;
    }

    Ok(())
}

/// Validates a parsed document and converts it into a [`LearningJourney`].
///
/// Fails with `SchemaValidation` when a required field is absent or has the
/// wrong container type. Required top-level fields are never defaulted to
/// make a document pass; inner values are read leniently.
pub fn validate_journey(value: Value) -> Result<LearningJourney> {
    check_shape(&value)?;

    serde_json::from_value(value).map_err(|err| {
        WaypointError::schema(format!("Invalid learning journey structure: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "title": "Ocean Currents",
            "description": "A week on how oceans move heat",
            "objectives": ["Explain thermohaline circulation"],
            "duration": "1 week",
            "targetAudience": ["Middle school"],
            "resources": [],
            "activities": [],
            "culturalConnections": [],
            "progressTracking": {"milestones": [], "assessmentMethods": []}
        })
    }

    fn without(field: &str) -> Value {
        let mut value = valid();
        value.as_object_mut().unwrap().remove(field);
        value
    }

    #[test]
    fn test_accepts_complete_document() {
        let journey = validate_journey(valid()).unwrap();
        assert_eq!(journey.title, "Ocean Currents");
        assert_eq!(journey.target_audience, vec!["Middle school"]);
    }

    #[test]
    fn test_each_required_list_must_exist() {
        for field in REQUIRED_LISTS {
            let err = validate_journey(without(field)).unwrap_err();
            assert!(err.is_schema(), "{field} should be required");
        }
    }

    #[test]
    fn test_truthy_non_list_is_rejected() {
        let mut value = valid();
        value["resources"] = json!({"0": {"title": "x"}});
        assert!(validate_journey(value).unwrap_err().is_schema());

        let mut value = valid();
        value["objectives"] = json!("learn things");
        assert!(validate_journey(value).unwrap_err().is_schema());
    }

    #[test]
    fn test_progress_tracking_sub_lists() {
        let mut value = valid();
        value["progressTracking"] = json!({"milestones": []});
        let err = validate_journey(value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Schema validation failed: `progressTracking.assessmentMethods` is missing"
        );

        assert!(validate_journey(without("progressTracking")).unwrap_err().is_schema());
    }

    #[test]
    fn test_title_must_be_string() {
        let mut value = valid();
        value["title"] = json!(42);
        assert!(validate_journey(value).unwrap_err().is_schema());
    }

    #[test]
    fn test_non_object_document() {
        assert!(validate_journey(json!([1, 2])).unwrap_err().is_schema());
    }

    #[test]
    fn test_duration_and_audience_are_optional() {
        let mut value = without("duration");
        value.as_object_mut().unwrap().remove("targetAudience");
        let journey = validate_journey(value).unwrap();
        assert!(journey.duration.is_empty());
        assert!(journey.target_audience.is_empty());
    }

    #[test]
    fn test_partial_inner_resources_pass() {
        let mut value = valid();
        value["resources"] = json!([{"title": "Only a title"}, {"url": "https://nasa.gov"}]);
        let journey = validate_journey(value).unwrap();
        assert_eq!(journey.resources.len(), 2);
        assert_eq!(journey.resources[1].url.as_deref(), Some("https://nasa.gov"));
    }

    #[test]
    fn test_null_and_mistyped_inner_fields_pass() {
        let mut value = valid();
        value["duration"] = Value::Null;
        value["targetAudience"] = json!("Kids");
        value["objectives"] = json!(["Count shells", 3]);
        value["resources"] = json!([
            {"type": "website", "title": null, "url": 42},
            "just a string",
            {"type": "video", "title": "Waves", "duration": null, "offlineAccess": "no"}
        ]);
        value["activities"] = json!([{"title": "Sketch", "duration": null, "steps": null}]);
        value["progressTracking"] =
            json!({"milestones": [null, "Week 1"], "assessmentMethods": []});

        let journey = validate_journey(value).unwrap();

        assert!(journey.duration.is_empty());
        assert_eq!(journey.target_audience, vec!["Kids"]);
        assert_eq!(journey.objectives, vec!["Count shells", "3"]);
        assert_eq!(journey.resources.len(), 2);
        assert_eq!(journey.resources[0].title, "");
        assert_eq!(journey.resources[0].url.as_deref(), Some("42"));
        assert!(journey.resources[1].duration.is_none());
        assert!(journey.resources[1].offline_access.is_none());
        assert_eq!(journey.activities[0].title, "Sketch");
        assert!(journey.activities[0].steps.is_empty());
        assert_eq!(journey.progress_tracking.milestones, vec!["Week 1"]);
    }

    #[test]
    fn test_unknown_tags_survive_validation() {
        let mut value = valid();
        value["resources"] = json!([{"type": "podcast", "title": "Ep", "difficulty": "expert"}]);

        let journey = validate_journey(value).unwrap();
        let out = journey.to_value();
        assert_eq!(out["resources"][0]["type"], "podcast");
        assert_eq!(out["resources"][0]["difficulty"], "expert");
        assert_eq!(validate_journey(out).unwrap(), journey);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let once = validate_journey(valid()).unwrap();
        let twice = validate_journey(once.to_value()).unwrap();
        assert_eq!(once, twice);
    }
}
