//! Stepping through a trip's daily sheets.
//!
//! The navigator is a plain value: every transition consumes the state and
//! returns the next one, and the selected sheet's log is recomputed on
//! demand. The index always stays within `[0, len - 1]` (or `0` when there
//! are no sheets).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daily_log::DailyLog;
use crate::sheet::LogSheet;

/// Where the current index sits relative to the ends of the sheet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Fewer than two sheets: at the start and the end at once.
    Only,
    AtStart,
    Middle,
    AtEnd,
}

impl Position {
    pub const fn is_at_start(self) -> bool {
        matches!(self, Self::Only | Self::AtStart)
    }

    pub const fn is_at_end(self) -> bool {
        matches!(self, Self::Only | Self::AtEnd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNavigatorState")]
pub struct NavigatorState {
    sheets: Vec<LogSheet>,
    current_index: usize,
}

#[derive(Deserialize)]
struct RawNavigatorState {
    #[serde(default)]
    sheets: Vec<LogSheet>,
    #[serde(default)]
    current_index: usize,
}

impl From<RawNavigatorState> for NavigatorState {
    fn from(raw: RawNavigatorState) -> Self {
        Self::new(raw.sheets).go_to(raw.current_index)
    }
}

impl NavigatorState {
    /// Starts at the first sheet.
    pub const fn new(sheets: Vec<LogSheet>) -> Self {
        Self {
            sheets,
            current_index: 0,
        }
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheets(&self) -> &[LogSheet] {
        &self.sheets
    }

    fn last_index(&self) -> usize {
        self.sheets.len().saturating_sub(1)
    }

    pub fn position(&self) -> Position {
        let last = self.last_index();
        match self.current_index {
            _ if last == 0 => Position::Only,
            0 => Position::AtStart,
            i if i == last => Position::AtEnd,
            _ => Position::Middle,
        }
    }

    /// Moves back one sheet unless already at the start.
    #[must_use]
    pub fn prev(mut self) -> Self {
        if self.position().is_at_start() {
            tracing::debug!(index = self.current_index, "prev at first sheet ignored");
        } else {
            self.current_index -= 1;
        }
        self
    }

    /// Moves forward one sheet unless already at the end.
    #[must_use]
    pub fn next(mut self) -> Self {
        if self.position().is_at_end() {
            tracing::debug!(index = self.current_index, "next at last sheet ignored");
        } else {
            self.current_index += 1;
        }
        self
    }

    /// Jumps to `index`, clamped into range.
    #[must_use]
    pub fn go_to(mut self, index: usize) -> Self {
        self.current_index = index.min(self.last_index());
        self
    }

    /// Jumps to the first sheet for `date`. Unknown dates leave the index alone.
    #[must_use]
    pub fn go_to_date(self, date: NaiveDate) -> Self {
        match self.sheets.iter().position(|sheet| sheet.date == date) {
            Some(index) => self.go_to(index),
            None => {
                tracing::debug!(%date, "no sheet for date");
                self
            }
        }
    }

    pub fn current(&self) -> Option<&LogSheet> {
        self.sheets.get(self.current_index)
    }

    /// Computes the log for the selected sheet.
    pub fn select(&self) -> Option<DailyLog> {
        self.current().map(DailyLog::from_sheet)
    }

    /// "Sheet N of M" for the current selection.
    pub fn position_label(&self) -> String {
        format!("Sheet {} of {}", self.current_index + 1, self.len())
    }
}
