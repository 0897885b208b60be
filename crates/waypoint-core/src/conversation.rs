//! Follow-up conversation after a successful generation.
//!
//! The facilitator opens with a plan message and up to three other
//! participants reply with canned, role-based remarks. Messages carry the
//! pacing offset a UI should wait before showing each one.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use crate::profile::{AgentProfile, AgentRole};

/// Kind of conversation message.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageKind {
    Suggestion,
    Question,
    Plan,
    Feedback,
}

/// A single message in the conversation feed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub agent_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// How long after the previous batch this message should appear
    #[serde(skip)]
    pub delay: Duration,
}

const REPLY_DELAYS_SECS: [u64; 3] = [1, 2, 3];
const REPLY_KINDS: [MessageKind; 3] = [
    MessageKind::Suggestion,
    MessageKind::Question,
    MessageKind::Feedback,
];

const SPECIALIST_REPLY: &str = "Given the diverse learning styles in our group, we should consider multiple approaches. I can help adapt the content for different needs.";
const FACILITATOR_REPLY: &str = "Great suggestions! Let's create a balanced plan that incorporates everyone's strengths and preferences.";

/// Canned remark for a participant, based on their role.
pub fn role_reply(profile: &AgentProfile) -> String {
    match profile.role {
        AgentRole::Teacher => {
            let focus = profile
                .interests
                .first()
                .map(String::as_str)
                .unwrap_or("the group's interests");
            format!(
                "Based on my expertise in {}, I suggest we focus on interactive learning activities that incorporate {}.",
                profile.preferences.expertise.join(" and "),
                focus
            )
        }
        AgentRole::Student => format!(
            "I'm excited to learn about this! Could we incorporate some {} learning approaches? I learn best that way.",
            profile.preferences.learning_style
        ),
        AgentRole::LearningSpecialist => SPECIALIST_REPLY.to_string(),
        AgentRole::Facilitator => FACILITATOR_REPLY.to_string(),
    }
}

fn message(
    profile: &AgentProfile,
    text: String,
    kind: MessageKind,
    now: DateTime<Utc>,
    delay: Duration,
) -> ConversationMessage {
    let offset = chrono::Duration::from_std(delay).unwrap_or_else(|_| chrono::Duration::zero());
    ConversationMessage {
        id: Uuid::new_v4().to_string(),
        timestamp: now + offset,
        agent_id: profile.id.clone(),
        message: text,
        kind,
        delay,
    }
}

/// Builds the follow-up messages for a finished generation.
///
/// Returns nothing when no participant is a facilitator.
pub fn follow_up_messages(
    scenario: &str,
    participants: &[AgentProfile],
    now: DateTime<Utc>,
) -> Vec<ConversationMessage> {
    let Some(facilitator) = participants
        .iter()
        .find(|p| p.role == AgentRole::Facilitator)
    else {
        return Vec::new();
    };

    let mut messages = vec![message(
        facilitator,
        format!(
            "I've analyzed the learning scenario: \"{}\" and created a personalized learning journey. Let's review it together.",
            scenario
        ),
        MessageKind::Plan,
        now,
        Duration::ZERO,
    )];

    let others = participants.iter().filter(|p| p.id != facilitator.id);
    for ((profile, kind), delay_secs) in others.zip(REPLY_KINDS).zip(REPLY_DELAYS_SECS) {
        messages.push(message(
            profile,
            role_reply(profile),
            kind,
            now,
            Duration::from_secs(delay_secs),
        ));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::get_default_presets;

    #[test]
    fn test_facilitator_opens_and_three_reply() {
        let now = Utc::now();
        let messages = follow_up_messages("Tide pools", &get_default_presets(), now);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].agent_id, "facilitator-1");
        assert_eq!(messages[0].kind, MessageKind::Plan);
        assert!(messages[0].message.contains("\"Tide pools\""));

        let kinds: Vec<MessageKind> = messages[1..].iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MessageKind::Suggestion, MessageKind::Question, MessageKind::Feedback]
        );
        assert_eq!(messages[3].timestamp - now, chrono::Duration::seconds(3));
    }

    #[test]
    fn test_no_facilitator_no_messages() {
        let presets: Vec<AgentProfile> = get_default_presets()
            .into_iter()
            .filter(|p| p.role != AgentRole::Facilitator)
            .collect();
        assert!(follow_up_messages("x", &presets, Utc::now()).is_empty());
    }

    #[test]
    fn test_replies_capped_at_three() {
        let mut roster = get_default_presets();
        let mut extra = roster[1].clone();
        extra.id = "student-2".to_string();
        roster.push(extra);

        let messages = follow_up_messages("x", &roster, Utc::now());
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| m.agent_id != "student-2"));
    }

    #[test]
    fn test_role_replies() {
        let presets = get_default_presets();
        assert_eq!(
            role_reply(&presets[2]),
            "Based on my expertise in Mathematics and Physics, I suggest we focus on interactive learning activities that incorporate STEM Education."
        );
        assert!(role_reply(&presets[1]).contains("Visual-Spatial learning approaches"));
    }
}
