//! Configuration models.
//!
//! `RootConfig` is read from `config.toml`, `SecretConfig` from
//! `secret.json`. Loading lives in `waypoint-infrastructure`; these are the
//! shapes only.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
pub const DEFAULT_MODEL: &str = "nvidia/llama-3.1-nemotron-70b-instruct";

/// Sampling temperature of every generation request.
pub const TEMPERATURE: f32 = 0.7;
/// Completion token bound of every generation request.
pub const MAX_TOKENS: u32 = 2048;

/// Settings for the chat-completion endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    /// Base URL; `/chat/completions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Default generation deadline in seconds (no deadline when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            request_timeout_secs: None,
        }
    }
}

impl CompletionSettings {
    /// Full chat-completions URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub completion: CompletionSettings,
}

/// Root of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub completion: Option<CompletionSecret>,
}

/// Credential for the completion endpoint.
#[derive(Deserialize, Serialize, Clone)]
pub struct CompletionSecret {
    pub api_key: String,
}

impl std::fmt::Debug for CompletionSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionSecret")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
