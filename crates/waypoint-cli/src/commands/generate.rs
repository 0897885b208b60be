use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use std::time::Duration;
use waypoint_core::conversation::follow_up_messages;
use waypoint_core::secret::SecretService;
use waypoint_core::{GenerationRequest, JourneyGenerator};
use waypoint_infrastructure::{ConfigService, SecretServiceImpl, WaypointPaths};
use waypoint_interaction::ChatCompletionClient;

use super::utils::ensure_ready;
use super::{OutputFormat, Selection, render};

pub async fn run(
    selection: &Selection,
    timeout: Option<u64>,
    format: OutputFormat,
    config_dir: Option<&Path>,
) -> Result<()> {
    // Settings and credential resolve before any input is considered.
    let paths = WaypointPaths::new(config_dir);
    let config = ConfigService::new(&paths)?.load()?;
    let api_key = SecretServiceImpl::new(&paths)?.completion_api_key().await?;

    let participants = selection.participants()?;
    ensure_ready(&selection.scenario, &participants)?;

    let settings = config.completion;
    let default_deadline = settings.request_timeout_secs.map(Duration::from_secs);
    tracing::info!(
        model = %settings.model,
        participants = participants.len(),
        "Generating learning journey"
    );

    let client = ChatCompletionClient::new(settings, api_key);
    let generator = JourneyGenerator::new(client).with_default_deadline(default_deadline);

    let mut request = GenerationRequest::new(selection.scenario.clone(), participants);
    if let Some(secs) = timeout {
        request = request.with_deadline(Duration::from_secs(secs));
    }

    let journey = generator.generate(&request).await?;
    let messages = follow_up_messages(&request.scenario, &request.participants, Utc::now());

    render::print_outcome(format, &journey, &messages, &request.participants)
}
