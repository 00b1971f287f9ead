//! Daily log sheets and the trip that owns them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::event::Event;

/// The events of one 24-hour period, in planner order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLogSheet")]
pub struct LogSheet {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

impl LogSheet {
    pub const fn new(date: NaiveDate, events: Vec<Event>) -> Self {
        Self { date, events }
    }
}

/// Wire form of a sheet.
///
/// The planner stores events under `sheet_json.events`; callers may also
/// send them flat under `events`. Flat events win when both are present.
#[derive(Deserialize)]
struct RawLogSheet {
    date: NaiveDate,
    #[serde(default)]
    events: Option<Vec<Event>>,
    #[serde(default)]
    sheet_json: Option<SheetJson>,
}

#[derive(Deserialize)]
struct SheetJson {
    #[serde(default)]
    events: Option<Vec<Event>>,
}

impl From<RawLogSheet> for LogSheet {
    fn from(raw: RawLogSheet) -> Self {
        let events = raw
            .events
            .or_else(|| raw.sheet_json.and_then(|nested| nested.events))
            .unwrap_or_default();
        Self {
            date: raw.date,
            events,
        }
    }
}

/// A planned trip: ordered daily sheets plus opaque planner metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default)]
    pub logsheets: Vec<LogSheet>,

    /// Everything else the planner sent (locations, stops, route, ...).
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Trip {
    pub fn new(logsheets: Vec<LogSheet>) -> Self {
        Self {
            logsheets,
            metadata: serde_json::Map::new(),
        }
    }

    /// Decodes a trip document.
    ///
    /// Accepts either a trip object with a `logsheets` array or a bare array
    /// of sheets.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(DocumentError::Trip)?;
        if value.is_array() {
            let logsheets = serde_json::from_value(value).map_err(DocumentError::Trip)?;
            return Ok(Self::new(logsheets));
        }
        serde_json::from_value(value).map_err(DocumentError::Trip)
    }
}

/// Decodes a flat JSON array of events.
pub fn events_from_json(input: &str) -> Result<Vec<Event>, DocumentError> {
    serde_json::from_str(input).map_err(DocumentError::Events)
}
