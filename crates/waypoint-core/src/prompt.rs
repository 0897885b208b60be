//! Prompt construction for learning journey generation.
//!
//! The prompt is a pure function of the scenario text and participant list.
//! It declares the expected document shape, lists each participant as a
//! labeled block, embeds the scenario verbatim and closes with the content
//! requirements and a JSON-only instruction.

use crate::profile::AgentProfile;

/// System message sent alongside every generation prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a JSON-only response AI. Always respond with valid JSON.";

const PREAMBLE: &str = "You are an expert educational content curator and learning experience designer. Generate a learning journey in JSON format that matches this schema:";

const JOURNEY_SCHEMA: &str = r#"LearningJourney {
  title: string
  description: string
  objectives: list of string
  duration: string
  targetAudience: list of string
  resources: list of {
    type: one of "video" | "website" | "printable" | "activity" | "experience"
    title: string
    description: string
    url?: string
    duration?: string
    difficulty?: one of "beginner" | "intermediate" | "advanced"
    requiredMaterials?: list of string
    offlineAccess?: boolean
  }
  activities: list of {
    title: string
    description: string
    duration: string
    steps: list of string
    adaptations: list of string
  }
  culturalConnections: list of {
    topic: string
    description: string
    activities: list of string
  }
  progressTracking: {
    milestones: list of string
    assessmentMethods: list of string
  }
}
(fields marked with ? are optional)"#;

const REQUIREMENTS: [&str; 6] = [
    "Clear learning objectives aligned with participant interests",
    "Mix of online and offline activities",
    "Curated educational resources (videos, articles, interactive content)",
    "Cultural connections and real-world applications",
    "Progress tracking milestones",
    "Adaptations for different learning styles",
];

const CLOSING: &str = "Respond ONLY with the JSON object, no additional text.";

/// Renders one participant as a labeled block.
///
/// `position` is 1-based and appears in the block header.
pub fn participant_block(position: usize, profile: &AgentProfile) -> String {
    format!(
        "Participant {position}:\n\
         Role: {role}\n\
         Name: {name}\n\
         Learning Style: {style}\n\
         Interests: {interests}\n\
         Strengths: {strengths}\n\
         Expertise: {expertise}\n",
        role = profile.role,
        name = profile.name,
        style = profile.preferences.learning_style,
        interests = profile.interests.join(", "),
        strengths = profile.strengths.join(", "),
        expertise = profile.preferences.expertise.join(", "),
    )
}

/// Builds the user prompt for one generation request.
///
/// Never fails. An empty participant list still produces a complete prompt
/// with an explicit "no participants" marker.
pub fn build_journey_prompt(scenario: &str, participants: &[AgentProfile]) -> String {
    let mut prompt = String::new();

    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    prompt.push_str(JOURNEY_SCHEMA);
    prompt.push_str("\n\nCreate a learning journey for these participants:\n\n");

    if participants.is_empty() {
        prompt.push_str("(no participants listed)\n");
    } else {
        let blocks: Vec<String> = participants
            .iter()
            .enumerate()
            .map(|(index, profile)| participant_block(index + 1, profile))
            .collect();
        prompt.push_str(&blocks.join("\n"));
    }

    prompt.push_str("\nBased on this prompt: ");
    prompt.push_str(scenario);
    prompt.push_str("\n\nInclude:\n");
    for (index, requirement) in REQUIREMENTS.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", index + 1, requirement));
    }
    prompt.push('\n');
    prompt.push_str(CLOSING);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::get_default_presets;

    #[test]
    fn test_prompt_embeds_scenario_verbatim() {
        let scenario = "Plan a 2-week unit on tide pools {with braces} & \"quotes\"";
        let prompt = build_journey_prompt(scenario, &get_default_presets());
        assert!(prompt.contains(scenario));
    }

    #[test]
    fn test_one_block_per_participant_in_order() {
        let presets = get_default_presets();
        let prompt = build_journey_prompt("Astronomy night", &presets);

        let mut last = 0;
        for (index, profile) in presets.iter().enumerate() {
            let header = format!(
                "Participant {}:\nRole: {}\nName: {}",
                index + 1,
                profile.role,
                profile.name
            );
            let found = prompt.find(&header).expect("block present");
            assert!(found >= last, "blocks out of order");
            last = found;
            assert_eq!(prompt.matches(&header).count(), 1);
        }
        assert!(!prompt.contains(&format!("Participant {}:", presets.len() + 1)));
    }

    #[test]
    fn test_block_lists_profile_fields() {
        let presets = get_default_presets();
        let block = participant_block(2, &presets[1]);
        assert!(block.starts_with("Participant 2:\n"));
        assert!(block.contains("Role: student\n"));
        assert!(block.contains("Learning Style: Visual-Spatial\n"));
        assert!(block.contains("Interests: Computer Science, Art, Music Production\n"));
        assert!(
            block.contains("Strengths: Creative Problem Solving, Digital Skills, Visual Learning\n")
        );
        assert!(block.contains("Expertise: Programming, Digital Art\n"));
    }

    #[test]
    fn test_zero_participants_still_well_formed() {
        let prompt = build_journey_prompt("Anything", &[]);
        assert!(prompt.contains("(no participants listed)"));
        assert!(prompt.contains("progressTracking"));
        assert!(prompt.ends_with(CLOSING));
    }

    #[test]
    fn test_prompt_lists_requirements_and_schema() {
        let prompt = build_journey_prompt("Music", &[]);
        for requirement in REQUIREMENTS {
            assert!(prompt.contains(requirement));
        }
        assert!(prompt.contains("culturalConnections: list of {"));
        assert!(prompt.contains("Respond ONLY with the JSON object"));
    }
}
