//! Waypoint interaction: HTTP clients for external completion services.

pub mod chat_completion_client;

pub use chat_completion_client::ChatCompletionClient;
