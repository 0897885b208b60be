pub mod agents;
pub mod generate;
pub mod interpret;
pub mod prompt;
pub mod render;
pub mod utils;

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Output format for journeys.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Scenario plus the participants taking part in it.
#[derive(Args, Debug, Clone, Default)]
pub struct Selection {
    /// Learning scenario, e.g. "Exploring tide pools with a 7 year old"
    #[arg(short, long)]
    pub scenario: String,

    /// JSON file with an array of agent profiles (starter roster when omitted)
    #[arg(long)]
    pub profiles: Option<PathBuf>,

    /// Participating agent id, repeatable (whole roster when omitted)
    #[arg(short, long = "agent")]
    pub agents: Vec<String>,
}
