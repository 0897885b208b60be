//! Completion client abstraction.
//!
//! The generator talks to the outside world through exactly one method:
//! request in, completion text out. The HTTP implementation lives in
//! `waypoint-interaction`; tests substitute in-memory fakes.

use std::sync::Arc;

use crate::error::Result;
use crate::prompt::SYSTEM_INSTRUCTION;

/// One chat-completion call: a system instruction plus the user prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
        }
    }

    /// Request carrying the JSON-only system instruction.
    pub fn json_only(prompt: impl Into<String>) -> Self {
        Self::new(SYSTEM_INSTRUCTION, prompt)
    }
}

/// Sends a single, non-streaming completion request.
///
/// Implementations perform exactly one attempt. Transport failures and
/// non-success statuses map to `WaypointError::Network`; a success without
/// message content maps to `WaypointError::EmptyResponse`.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

#[async_trait::async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        (**self).complete(request).await
    }
}
