//! Duty-status log sheet engine.
//!
//! This crate turns the sparse duty-status events of a planned trip into
//! what a driver's daily log sheet shows:
//! - Classification: free-text status labels to one of four duty categories
//! - Grid: events binned into 96 quarter-hour slots per category (UTC day)
//! - Totals: per-category and grand-total durations in `H:MM` form
//! - Navigation: a bounded cursor over a trip's daily sheets
//!
//! None of these operations fail on bad event data; malformed events are
//! left off the grid.

pub mod assemble;
pub mod category;
pub mod daily_log;
mod error;
pub mod event;
pub mod grid;
pub mod navigator;
pub mod sheet;
pub mod totals;

pub use assemble::{assemble_sheets, split_at_midnight};
pub use category::{DutyCategory, UnknownCategory, classify};
pub use daily_log::{DailyLog, SheetHeader, remarks};
pub use error::DocumentError;
pub use event::{Event, GridEvent, parse_timestamp};
pub use grid::{DutyGrid, SLOTS_PER_DAY, map_events, slot_range};
pub use navigator::{NavigatorState, Position};
pub use sheet::{LogSheet, Trip, events_from_json};
pub use totals::{HoursMinutes, Totals, aggregate};
