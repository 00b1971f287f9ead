//! Everything needed to draw one daily log sheet.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::event::Event;
use crate::grid::DutyGrid;
use crate::sheet::LogSheet;
use crate::totals::{Totals, aggregate};

/// Separator between remark entries.
const REMARK_SEPARATOR: &str = "; ";

/// Grid, totals and remarks for one sheet, computed fresh from its events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub grid: DutyGrid,
    pub totals: Totals,
    pub remarks: String,
}

impl DailyLog {
    pub fn from_sheet(sheet: &LogSheet) -> Self {
        let grid = DutyGrid::from_events(&sheet.events);
        let totals = aggregate(&grid);
        Self {
            date: sheet.date,
            grid,
            totals,
            remarks: remarks(&sheet.events),
        }
    }

    pub fn header(&self) -> SheetHeader {
        SheetHeader::for_date(self.date)
    }
}

/// Calendar fields printed at the top of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetHeader {
    pub date: NaiveDate,
    pub month: String,
    pub weekday: String,
    pub year: i32,
}

impl SheetHeader {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            month: date.format("%B").to_string(),
            weekday: date.format("%A").to_string(),
            year: date.year(),
        }
    }
}

/// Joins `"{status}: {note}"` for every event with a non-empty note.
pub fn remarks(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|event| {
            let note = event.note.as_deref().filter(|note| !note.is_empty())?;
            Some(format!("{}: {note}", event.status_label()))
        })
        .collect::<Vec<_>>()
        .join(REMARK_SEPARATOR)
}
