//! Text and JSON rendering of journeys and follow-up messages.

use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;
use waypoint_core::conversation::ConversationMessage;
use waypoint_core::{AgentProfile, LearningJourney};

use super::OutputFormat;

/// Prints a journey and its follow-up messages in the requested format.
pub fn print_outcome(
    format: OutputFormat,
    journey: &LearningJourney,
    messages: &[ConversationMessage],
    participants: &[AgentProfile],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let outcome = serde_json::json!({
                "journey": journey,
                "messages": messages,
            });
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Text => {
            print!("{}", journey_text(journey));
            if !messages.is_empty() {
                println!();
                print!("{}", conversation_text(messages, participants));
            }
        }
    }
    Ok(())
}

/// Prints a journey alone in the requested format.
pub fn print_journey(format: OutputFormat, journey: &LearningJourney) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(journey)?),
        OutputFormat::Text => print!("{}", journey_text(journey)),
    }
    Ok(())
}

fn section(out: &mut String, heading: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading.bold().underline());
}

pub fn journey_text(journey: &LearningJourney) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", journey.title.bold().green());
    let _ = writeln!(out, "{}", journey.description);
    if !journey.duration.is_empty() {
        let _ = writeln!(out, "Duration: {}", journey.duration);
    }
    if !journey.target_audience.is_empty() {
        let _ = writeln!(out, "Audience: {}", journey.target_audience.join(", "));
    }

    section(&mut out, "Objectives");
    for objective in &journey.objectives {
        let _ = writeln!(out, "  - {}", objective);
    }

    section(&mut out, "Resources");
    for resource in &journey.resources {
        let mut line = match &resource.kind {
            Some(kind) => format!("  - [{}] {}", kind, resource.title),
            None => format!("  - {}", resource.title),
        };
        if let Some(difficulty) = &resource.difficulty {
            let _ = write!(line, " ({})", difficulty);
        }
        if let Some(duration) = &resource.duration {
            let _ = write!(line, ", {}", duration);
        }
        let _ = writeln!(out, "{}", line);
        if !resource.description.is_empty() {
            let _ = writeln!(out, "    {}", resource.description);
        }
        if let Some(url) = &resource.url {
            let _ = writeln!(out, "    {}", url.blue());
        }
        if let Some(materials) = resource.required_materials.as_ref().filter(|m| !m.is_empty()) {
            let _ = writeln!(out, "    Materials: {}", materials.join(", "));
        }
    }

    section(&mut out, "Activities");
    for activity in &journey.activities {
        if activity.duration.is_empty() {
            let _ = writeln!(out, "  - {}", activity.title);
        } else {
            let _ = writeln!(out, "  - {} ({})", activity.title, activity.duration);
        }
        if !activity.description.is_empty() {
            let _ = writeln!(out, "    {}", activity.description);
        }
        for (step, text) in activity.steps.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", step + 1, text);
        }
        if !activity.adaptations.is_empty() {
            let _ = writeln!(out, "    Adaptations: {}", activity.adaptations.join("; "));
        }
    }

    if !journey.cultural_connections.is_empty() {
        section(&mut out, "Cultural connections");
        for connection in &journey.cultural_connections {
            let _ = writeln!(out, "  - {}: {}", connection.topic, connection.description);
            if !connection.activities.is_empty() {
                let _ = writeln!(out, "    Try: {}", connection.activities.join("; "));
            }
        }
    }

    section(&mut out, "Progress tracking");
    let tracking = &journey.progress_tracking;
    let _ = writeln!(out, "  Milestones: {}", tracking.milestones.join("; "));
    let _ = writeln!(out, "  Assessment: {}", tracking.assessment_methods.join("; "));

    out
}

pub fn conversation_text(
    messages: &[ConversationMessage],
    participants: &[AgentProfile],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Conversation".bold().underline());

    for message in messages {
        let speaker = participants
            .iter()
            .find(|p| p.id == message.agent_id)
            .map(|p| p.name.as_str())
            .unwrap_or(message.agent_id.as_str());
        let _ = writeln!(
            out,
            "  [+{}s] {} ({}): {}",
            message.delay.as_secs(),
            speaker.cyan(),
            message.kind,
            message.message
        );
    }

    out
}
