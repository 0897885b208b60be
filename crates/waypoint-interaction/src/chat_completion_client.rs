//! ChatCompletionClient - REST client for OpenAI-compatible chat completions.
//!
//! Sends one non-streaming `POST {base_url}/chat/completions` per call with a
//! bearer credential. The credential is injected by the caller; this module
//! never reads it from the environment.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use waypoint_core::config::{CompletionSettings, MAX_TOKENS, TEMPERATURE};
use waypoint_core::{CompletionClient, CompletionRequest, Result, WaypointError};

/// Completion client that talks to an OpenAI-compatible HTTP API.
#[derive(Clone)]
pub struct ChatCompletionClient {
    client: Client,
    api_key: String,
    settings: CompletionSettings,
}

impl ChatCompletionClient {
    /// Creates a client with the provided settings and API key.
    pub fn new(settings: CompletionSettings, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            settings,
        }
    }

    /// Replaces the underlying HTTP client (proxies, custom TLS, ...).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    fn build_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionBody<'a> {
        ChatCompletionBody {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        }
    }

    async fn send_request(&self, body: &ChatCompletionBody<'_>) -> Result<String> {
        let url = self.settings.completions_url();
        tracing::debug!(url = %url, model = %body.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| WaypointError::transport(format!("Completion request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            let err = map_http_error(status, &body_text);
            tracing::warn!(
                status = status.as_u16(),
                error = %err,
                "Completion endpoint returned an error"
            );
            return Err(err);
        }

        let body_text = response
            .text()
            .await
            .map_err(|err| {
                WaypointError::transport(format!("Failed to read completion body: {err}"))
            })?;

        extract_text_response(&body_text)
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = self.build_body(request);
        self.send_request(&body).await
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Error bodies seen in the wild: `{"message"}`, `{"error": {"message"}}`,
/// `{"error": "..."}` and `{"detail"}`.
#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<ErrorField>,
    detail: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Body { message: String },
    Text(String),
}

fn extract_text_response(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|_| WaypointError::empty_response("Invalid response from AI service"))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| WaypointError::empty_response("Invalid response from AI service"))
}

fn reported_message(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    let message = parsed
        .message
        .or(parsed.error.map(|field| match field {
            ErrorField::Body { message } => message,
            ErrorField::Text(text) => text,
        }))
        .or(parsed.detail)?;

    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}

fn map_http_error(status: StatusCode, body: &str) -> WaypointError {
    let message =
        reported_message(body).unwrap_or_else(|| format!("API error: {}", status.as_u16()));
    WaypointError::http_status(status.as_u16(), message)
}
