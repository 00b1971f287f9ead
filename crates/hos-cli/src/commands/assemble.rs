//! Assemble command: group a flat event list into daily sheets.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use hos_core::{Trip, assemble_sheets, events_from_json};

/// Runs the assemble command.
pub fn run<W: Write>(writer: &mut W, events_path: &Path) -> Result<()> {
    let input = std::fs::read_to_string(events_path)
        .with_context(|| format!("failed to read {}", events_path.display()))?;
    let events = events_from_json(&input)
        .with_context(|| format!("failed to parse {}", events_path.display()))?;

    let trip = Trip::new(assemble_sheets(&events));
    writeln!(writer, "{}", serde_json::to_string_pretty(&trip)?)?;
    Ok(())
}
