//! Journey generation pipeline.
//!
//! Build -> Send -> Extract -> Validate -> Sanitize, strictly in that order.
//! The first failing stage ends the request; a partial journey is never
//! returned. The generator keeps no state between calls, so overlapping
//! requests on the same generator are independent.

use std::time::Duration;

use tracing::Instrument;

use crate::completion::{CompletionClient, CompletionRequest};
use crate::error::{Result, WaypointError};
use crate::journey::{LearningJourney, parse_completion, sanitize_resource_urls, validate_journey};
use crate::profile::AgentProfile;
use crate::prompt::build_journey_prompt;

/// Input of one generation: scenario text plus the participating profiles.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub scenario: String,
    pub participants: Vec<AgentProfile>,
    /// Upper bound on the network wait; `None` waits indefinitely
    pub deadline: Option<Duration>,
}

impl GenerationRequest {
    pub fn new(scenario: impl Into<String>, participants: Vec<AgentProfile>) -> Self {
        Self {
            scenario: scenario.into(),
            participants,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Turns raw completion text into a validated, sanitized journey.
///
/// This is the Extract -> Validate -> Sanitize half of the pipeline, usable
/// on its own for replaying stored completions.
pub fn interpret_completion(content: &str) -> Result<LearningJourney> {
    let value = parse_completion(content)?;
    let mut journey = validate_journey(value)?;
    let replaced = sanitize_resource_urls(&mut journey);

    tracing::debug!(
        resources = journey.resources.len(),
        activities = journey.activities.len(),
        replaced_urls = replaced,
        "Validated learning journey"
    );
    Ok(journey)
}

/// Generates learning journeys through an injected completion client.
pub struct JourneyGenerator<C> {
    client: C,
    default_deadline: Option<Duration>,
}

impl<C: CompletionClient> JourneyGenerator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            default_deadline: None,
        }
    }

    /// Deadline applied to requests that do not carry their own.
    pub fn with_default_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.default_deadline = deadline;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generates a journey for `scenario` with the given participants.
    pub async fn generate_journey(
        &self,
        scenario: &str,
        participants: &[AgentProfile],
    ) -> Result<LearningJourney> {
        self.run(scenario, participants, self.default_deadline).await
    }

    /// Generates a journey for a prepared request.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<LearningJourney> {
        let deadline = request.deadline.or(self.default_deadline);
        self.run(&request.scenario, &request.participants, deadline)
            .await
    }

    async fn run(
        &self,
        scenario: &str,
        participants: &[AgentProfile],
        deadline: Option<Duration>,
    ) -> Result<LearningJourney> {
        let span = tracing::info_span!("generate_journey", participants = participants.len());

        async move {
            let prompt = build_journey_prompt(scenario, participants);
            tracing::debug!(prompt_chars = prompt.len(), "Built journey prompt");

            let request = CompletionRequest::json_only(prompt);
            let content = self.send(&request, deadline).await?;
            tracing::info!(completion_chars = content.len(), "Received completion");

            interpret_completion(&content).inspect_err(|err| {
                tracing::warn!(error = %err, "Discarding completion");
            })
        }
        .instrument(span)
        .await
    }

    async fn send(
        &self,
        request: &CompletionRequest,
        deadline: Option<Duration>,
    ) -> Result<String> {
        match deadline {
            Some(after) => tokio::time::timeout(after, self.client.complete(request))
                .await
                .map_err(|_| WaypointError::Timeout { after })?,
            None => self.client.complete(request).await,
        }
    }
}
