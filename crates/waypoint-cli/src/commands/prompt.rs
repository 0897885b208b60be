use anyhow::Result;
use waypoint_core::prompt::{SYSTEM_INSTRUCTION, build_journey_prompt};

use super::Selection;

pub fn print(selection: &Selection) -> Result<()> {
    let participants = selection.participants()?;

    println!("# System");
    println!("{}", SYSTEM_INSTRUCTION);
    println!();
    println!("# Prompt");
    println!("{}", build_journey_prompt(&selection.scenario, &participants));

    Ok(())
}
