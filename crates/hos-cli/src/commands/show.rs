//! Show command: one daily log sheet as a text grid or JSON.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use hos_core::{DailyLog, DutyCategory, NavigatorState, SLOTS_PER_DAY, Trip};

use crate::Config;

/// Width of the row label column.
const LABEL_WIDTH: usize = 12;

/// Width of the totals column.
const TOTAL_WIDTH: usize = 7;

/// Glyphs and sections used when drawing a sheet as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStyle {
    pub filled: char,
    pub empty: char,
    pub remarks: bool,
}

impl From<&Config> for GridStyle {
    fn from(config: &Config) -> Self {
        Self {
            filled: config.filled,
            empty: config.empty,
            remarks: config.remarks,
        }
    }
}

/// Which sheet to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    First,
    /// 1-based sheet number.
    Number(usize),
    Date(NaiveDate),
}

impl Selection {
    pub fn from_args(sheet: Option<usize>, date: Option<NaiveDate>) -> Self {
        match (sheet, date) {
            (_, Some(date)) => Self::Date(date),
            (Some(number), None) => Self::Number(number),
            (None, None) => Self::First,
        }
    }
}

/// Builds a navigator positioned on the requested sheet.
pub fn navigate(trip: Trip, selection: Selection) -> Result<NavigatorState> {
    let nav = NavigatorState::new(trip.logsheets);
    if nav.is_empty() {
        bail!("trip has no log sheets");
    }

    match selection {
        Selection::First => Ok(nav),
        Selection::Number(number) => {
            if number == 0 || number > nav.len() {
                bail!("sheet {number} out of range (trip has {} sheets)", nav.len());
            }
            Ok(nav.go_to(number - 1))
        }
        Selection::Date(date) => {
            if !nav.sheets().iter().any(|sheet| sheet.date == date) {
                bail!("no sheet for {date}");
            }
            Ok(nav.go_to_date(date))
        }
    }
}

/// Builds the ruler of hour labels, four hour columns wide each.
fn hour_ruler() -> String {
    (0..24).map(|hour| format!("{hour:02}  ")).collect()
}

fn row_glyphs(log: &DailyLog, category: DutyCategory, style: &GridStyle) -> String {
    log.grid
        .row(category)
        .iter()
        .map(|active| if *active { style.filled } else { style.empty })
        .collect()
}

/// Draws a daily log: header, hour ruler, one row per category, totals, remarks.
pub fn write_daily_log<W: Write>(
    writer: &mut W,
    log: &DailyLog,
    style: &GridStyle,
    position: Option<&str>,
) -> std::io::Result<()> {
    let header = log.header();
    writeln!(writer, "Driver's Daily Log")?;
    writeln!(
        writer,
        "Date: {}  Month: {}  Day: {}  Year: {}",
        header.date, header.month, header.weekday, header.year
    )?;
    if let Some(position) = position {
        writeln!(writer, "{position}")?;
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "{:<LABEL_WIDTH$}{}{:>TOTAL_WIDTH$}",
        "HOURS",
        hour_ruler(),
        "Total"
    )?;
    for category in DutyCategory::ALL {
        writeln!(
            writer,
            "{:<LABEL_WIDTH$}{}{:>TOTAL_WIDTH$}",
            category.row_label(),
            row_glyphs(log, category, style),
            log.totals.get(category).to_string()
        )?;
    }
    writeln!(
        writer,
        "{:<width$}{:>TOTAL_WIDTH$}",
        "TOTAL",
        log.totals.grand_total().to_string(),
        width = LABEL_WIDTH + SLOTS_PER_DAY
    )?;

    if style.remarks {
        writeln!(writer)?;
        if log.remarks.is_empty() {
            writeln!(writer, "Remarks: none")?;
        } else {
            writeln!(writer, "Remarks: {}", log.remarks)?;
        }
    }

    Ok(())
}

/// Runs the show command.
pub fn run<W: Write>(
    writer: &mut W,
    trip: Trip,
    selection: Selection,
    json: bool,
    config: &Config,
) -> Result<()> {
    let nav = navigate(trip, selection)?;
    let Some(log) = nav.select() else {
        bail!("trip has no log sheets");
    };

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&log)?)?;
    } else {
        write_daily_log(writer, &log, &GridStyle::from(config), Some(&nav.position_label()))?;
    }

    Ok(())
}
