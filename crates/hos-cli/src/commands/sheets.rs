//! Sheets command: one line of recap totals per daily sheet.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use hos_core::{DailyLog, DutyCategory, Totals, Trip};
use serde::Serialize;

/// Recap row for one sheet.
#[derive(Debug, Serialize)]
pub struct SheetSummary {
    /// 1-based sheet number.
    pub sheet: usize,
    pub date: NaiveDate,
    pub events: usize,
    pub totals: Totals,
}

pub fn summarize(trip: &Trip) -> Vec<SheetSummary> {
    trip.logsheets
        .iter()
        .enumerate()
        .map(|(i, sheet)| SheetSummary {
            sheet: i + 1,
            date: sheet.date,
            events: sheet.events.len(),
            totals: DailyLog::from_sheet(sheet).totals,
        })
        .collect()
}

/// Formats summaries as an aligned table.
pub fn format_table(summaries: &[SheetSummary]) -> String {
    let mut lines = vec![format!(
        "{:<3}{:<12}{:>6}{:>10}{:>10}{:>10}{:>10}{:>10}",
        "#", "Date", "Events", "Off Duty", "Sleeper", "Driving", "On Duty", "Total"
    )];

    for summary in summaries {
        let [off, sleeper, driving, on] =
            DutyCategory::ALL.map(|category| summary.totals.get(category).to_string());
        lines.push(format!(
            "{:<3}{:<12}{:>6}{off:>10}{sleeper:>10}{driving:>10}{on:>10}{:>10}",
            summary.sheet,
            summary.date.to_string(),
            summary.events,
            summary.totals.grand_total().to_string(),
        ));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Runs the sheets command.
pub fn run<W: Write>(writer: &mut W, trip: &Trip, json: bool) -> Result<()> {
    let summaries = summarize(trip);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summaries)?)?;
        return Ok(());
    }

    if summaries.is_empty() {
        writeln!(writer, "No log sheets.")?;
        return Ok(());
    }

    write!(writer, "{}", format_table(&summaries))?;
    Ok(())
}
