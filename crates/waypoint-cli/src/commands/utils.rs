use anyhow::{Context, Result};
use std::path::Path;
use waypoint_core::AgentProfile;
use waypoint_core::profile::Roster;

use super::Selection;

/// Loads the roster from a JSON profile file, or the starter roster.
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    let Some(path) = path else {
        return Ok(Roster::with_presets());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles from {}", path.display()))?;
    let profiles: Vec<AgentProfile> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse profiles in {}", path.display()))?;

    tracing::debug!(count = profiles.len(), path = %path.display(), "Loaded agent profiles");
    Ok(Roster::from_profiles(profiles))
}

/// Loads the roster from `path`, or the starter roster when the file does not exist yet.
pub fn load_roster_or_presets(path: &Path) -> Result<Roster> {
    if path.exists() {
        load_roster(Some(path))
    } else {
        Ok(Roster::with_presets())
    }
}

/// Writes the roster as a JSON array of profiles.
pub fn save_roster(path: &Path, roster: &Roster) -> Result<()> {
    let content = serde_json::to_string_pretty(roster.profiles())?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write profiles to {}", path.display()))?;

    tracing::debug!(count = roster.len(), path = %path.display(), "Saved agent profiles");
    Ok(())
}

impl Selection {
    /// Resolves the selected agent ids against the roster, in roster order.
    pub fn participants(&self) -> Result<Vec<AgentProfile>> {
        let roster = load_roster(self.profiles.as_deref())?;
        if self.agents.is_empty() {
            return Ok(roster.profiles().to_vec());
        }
        Ok(roster.select(&self.agents)?)
    }
}

/// Rejects input the generate flow must not send to the completion endpoint.
pub fn ensure_ready(scenario: &str, participants: &[AgentProfile]) -> Result<()> {
    anyhow::ensure!(
        !scenario.trim().is_empty(),
        "Please enter a learning scenario"
    );
    anyhow::ensure!(
        !participants.is_empty(),
        "Please select at least one agent"
    );
    Ok(())
}
