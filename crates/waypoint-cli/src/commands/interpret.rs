use anyhow::{Context, Result};
use std::path::Path;
use waypoint_core::interpret_completion;

use super::{OutputFormat, render};

pub fn run(file: &Path, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read completion from {}", file.display()))?;
    let journey = interpret_completion(&content)?;
    render::print_journey(format, &journey)
}
