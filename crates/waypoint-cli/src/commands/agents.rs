use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use waypoint_core::profile::{AgentRole, CreateProfileRequest};

use super::utils::{load_roster, load_roster_or_presets, save_roster};

/// Profile fields given on the command line.
///
/// Tag fields are comma-separated, as in the profile form. Fields left out
/// keep their current value when editing.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileForm {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// teacher, student, facilitator or learning_specialist
    #[arg(long)]
    pub role: Option<AgentRole>,

    /// Comma-separated interests
    #[arg(long)]
    pub interests: Option<String>,

    /// Comma-separated strengths
    #[arg(long)]
    pub strengths: Option<String>,

    #[arg(long)]
    pub learning_style: Option<String>,

    #[arg(long)]
    pub communication_style: Option<String>,

    /// Comma-separated expertise
    #[arg(long)]
    pub expertise: Option<String>,

    /// Avatar image URL
    #[arg(long)]
    pub avatar: Option<String>,
}

impl ProfileForm {
    /// Overlays the given fields on `base`.
    pub fn apply(self, mut base: CreateProfileRequest) -> CreateProfileRequest {
        if let Some(name) = self.name {
            base.name = name;
        }
        if let Some(role) = self.role {
            base.role = role;
        }
        if let Some(interests) = self.interests {
            base.interests = interests;
        }
        if let Some(strengths) = self.strengths {
            base.strengths = strengths;
        }
        if let Some(learning_style) = self.learning_style {
            base.learning_style = learning_style;
        }
        if let Some(communication_style) = self.communication_style {
            base.communication_style = communication_style;
        }
        if let Some(expertise) = self.expertise {
            base.expertise = expertise;
        }
        if let Some(avatar) = self.avatar {
            base.avatar = Some(avatar);
        }
        base
    }
}

fn require_profiles(profiles: Option<&Path>) -> Result<&Path> {
    profiles.context("--profiles <file.json> is required to save agents")
}

pub fn list(profiles: Option<&Path>) -> Result<()> {
    let roster = load_roster(profiles)?;
    if roster.is_empty() {
        println!("No agents in roster.");
        return Ok(());
    }

    for profile in roster.profiles() {
        println!(
            "{} {} ({})",
            profile.id.cyan(),
            profile.name.bold(),
            profile.role.label()
        );
        if !profile.interests.is_empty() {
            println!("  Interests: {}", profile.interests.join(", "));
        }
        if !profile.strengths.is_empty() {
            println!("  Strengths: {}", profile.strengths.join(", "));
        }
        if !profile.preferences.learning_style.is_empty() {
            println!("  Learning style: {}", profile.preferences.learning_style);
        }
    }

    Ok(())
}

/// Adds an agent to the profiles file, seeding a new file with the starter roster.
pub fn add(profiles: Option<&Path>, form: ProfileForm) -> Result<String> {
    let path = require_profiles(profiles)?;
    let mut roster = load_roster_or_presets(path)?;

    let added = roster.add(form.apply(CreateProfileRequest::default()))?;
    let (id, name) = (added.id.clone(), added.name.clone());
    save_roster(path, &roster)?;

    println!("Added {} ({})", name.bold(), id.cyan());
    Ok(id)
}

/// Edits an agent in the profiles file, keeping its id.
pub fn edit(profiles: Option<&Path>, id: &str, form: ProfileForm) -> Result<()> {
    let path = require_profiles(profiles)?;
    let mut roster = load_roster_or_presets(path)?;

    let current = roster
        .get(id)
        .with_context(|| format!("Unknown agent id '{}'", id))?;
    let request = form.apply(CreateProfileRequest::from_profile(current));
    let name = roster.update(id, &request)?.name.clone();
    save_roster(path, &roster)?;

    println!("Updated {} ({})", name.bold(), id.cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::profile::get_default_presets;

    #[test]
    fn test_add_seeds_new_file_with_starter_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        let form = ProfileForm {
            name: Some("Mina".to_string()),
            role: Some(AgentRole::Student),
            interests: Some("Bugs, Rocks".to_string()),
            ..Default::default()
        };

        let id = add(Some(&path), form).unwrap();

        let roster = load_roster(Some(&path)).unwrap();
        assert_eq!(roster.len(), get_default_presets().len() + 1);
        let added = roster.get(&id).unwrap();
        assert_eq!(added.name, "Mina");
        assert_eq!(added.interests, vec!["Bugs", "Rocks"]);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");

        assert!(add(Some(&path), ProfileForm::default()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_add_requires_profiles_file() {
        let form = ProfileForm {
            name: Some("Mina".to_string()),
            ..Default::default()
        };
        let err = add(None, form).unwrap_err();
        assert!(err.to_string().contains("--profiles"));
    }

    #[test]
    fn test_edit_overlays_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        let form = ProfileForm {
            strengths: Some("Patience, Sketching".to_string()),
            ..Default::default()
        };

        edit(Some(&path), "student-1", form).unwrap();

        let roster = load_roster(Some(&path)).unwrap();
        let edited = roster.get("student-1").unwrap();
        let preset = get_default_presets()
            .into_iter()
            .find(|p| p.id == "student-1")
            .unwrap();
        assert_eq!(edited.strengths, vec!["Patience", "Sketching"]);
        assert_eq!(edited.name, preset.name);
        assert_eq!(edited.interests, preset.interests);
    }

    #[test]
    fn test_edit_unknown_agent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        assert!(edit(Some(&path), "ghost", ProfileForm::default()).is_err());
    }
}
