//! Browse command: line-driven navigation over a trip's sheets.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use chrono::NaiveDate;
use hos_core::{NavigatorState, Trip};

use super::show::{GridStyle, write_daily_log};
use crate::Config;

const HELP: &str = "commands: n (next), p (prev), g <sheet>, d <YYYY-MM-DD>, q (quit)";

/// A parsed browse command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    /// 1-based sheet number.
    Go(usize),
    Date(NaiveDate),
    Quit,
}

impl Command {
    /// Parses one input line. Returns `None` for blank or unrecognized input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?;
        let arg = parts.next();

        match (command, arg) {
            ("n" | "next", None) => Some(Self::Next),
            ("p" | "prev", None) => Some(Self::Prev),
            ("q" | "quit", None) => Some(Self::Quit),
            ("g" | "go", Some(arg)) => arg.parse().ok().map(Self::Go),
            ("d" | "date", Some(arg)) => arg.parse().ok().map(Self::Date),
            _ => None,
        }
    }

    /// Applies this command to the navigator.
    pub fn apply(self, nav: NavigatorState) -> NavigatorState {
        match self {
            Self::Next => nav.next(),
            Self::Prev => nav.prev(),
            Self::Go(number) => nav.go_to(number.saturating_sub(1)),
            Self::Date(date) => nav.go_to_date(date),
            Self::Quit => nav,
        }
    }
}

fn show_current<W: Write>(writer: &mut W, nav: &NavigatorState, style: &GridStyle) -> Result<()> {
    if let Some(log) = nav.select() {
        write_daily_log(writer, &log, style, Some(&nav.position_label()))?;
    }
    Ok(())
}

/// Runs the browse command, reading commands from `input` until quit or EOF.
pub fn run<R: BufRead, W: Write>(
    input: R,
    writer: &mut W,
    trip: Trip,
    config: &Config,
) -> Result<()> {
    let style = GridStyle::from(config);
    let mut nav = NavigatorState::new(trip.logsheets);
    if nav.is_empty() {
        bail!("trip has no log sheets");
    }

    show_current(writer, &nav, &style)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            writeln!(writer, "unknown command: {}", line.trim())?;
            writeln!(writer, "{HELP}")?;
            continue;
        };
        if command == Command::Quit {
            break;
        }

        let before = nav.current_index();
        nav = command.apply(nav);
        tracing::debug!(?command, before, after = nav.current_index(), "navigated");

        writeln!(writer)?;
        show_current(writer, &nav, &style)?;
    }

    Ok(())
}
