//! Quarter-hour duty grid.
//!
//! A day is divided into 96 fifteen-minute slots. Each event marks a
//! half-open slot range in exactly one category row:
//!
//! 1. Events without a parseable start are skipped
//! 2. The start slot comes from the UTC hour and minute of the start
//! 3. The end slot comes from the UTC end, capped at 95; without a parseable
//!    end the event covers one slot
//! 4. Slots `[start, min(end, 96))` are set in the classified row
//!
//! Rows are independent: overlapping events in different categories leave
//! both rows marked, so the four rows need not partition the day.

use std::ops::Range;

use chrono::{DateTime, Timelike, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::category::{DutyCategory, classify};
use crate::event::GridEvent;

/// Number of quarter-hour slots in a day.
pub const SLOTS_PER_DAY: usize = 96;

/// Slots per hour.
pub const SLOTS_PER_HOUR: usize = 4;

/// Minutes covered by one slot.
pub const SLOT_MINUTES: u32 = 15;

/// Highest end index an event may produce.
const MAX_END_SLOT: usize = SLOTS_PER_DAY - 1;

/// Returns the slot containing `at`, read in UTC.
pub fn slot_index(at: DateTime<Utc>) -> usize {
    let hour = at.hour() as usize;
    let quarter = (at.minute() / SLOT_MINUTES) as usize;
    hour * SLOTS_PER_HOUR + quarter
}

/// Computes the slot range an event covers, or `None` if it has no usable start.
pub fn slot_range<E: GridEvent + ?Sized>(event: &E) -> Option<Range<usize>> {
    let start = slot_index(event.start()?);
    let end = event
        .end()
        .map_or(start + 1, |end| slot_index(end).min(MAX_END_SLOT));
    Some(start..end.min(SLOTS_PER_DAY))
}

/// Activity flags for each category over one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyGrid {
    rows: [[bool; SLOTS_PER_DAY]; 4],
}

impl Default for DutyGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DutyGrid {
    /// Creates an all-false grid.
    pub const fn new() -> Self {
        Self {
            rows: [[false; SLOTS_PER_DAY]; 4],
        }
    }

    /// Builds a grid from events, applied in order.
    pub fn from_events<E: GridEvent>(events: &[E]) -> Self {
        let mut grid = Self::new();
        for event in events {
            grid.apply(event);
        }
        grid
    }

    /// Marks one event's slots. Returns `false` if the event was skipped.
    pub fn apply<E: GridEvent + ?Sized>(&mut self, event: &E) -> bool {
        let Some(range) = slot_range(event) else {
            tracing::debug!(status = event.status(), "skipping event without usable start time");
            return false;
        };

        let category = classify(event.status());
        tracing::trace!(?category, start = range.start, end = range.end, "marking slots");
        self.mark(category, range);
        true
    }

    /// Sets every slot in `range` for `category`. Out-of-day indices are ignored.
    pub fn mark(&mut self, category: DutyCategory, range: Range<usize>) {
        let end = range.end.min(SLOTS_PER_DAY);
        self.rows[category.row()][range.start.min(end)..end].fill(true);
    }

    /// The 96 slots of one category.
    pub const fn row(&self, category: DutyCategory) -> &[bool; SLOTS_PER_DAY] {
        &self.rows[category.row()]
    }

    /// Whether `category` is active during `slot`.
    pub fn is_active(&self, category: DutyCategory, slot: usize) -> bool {
        self.rows[category.row()].get(slot).copied().unwrap_or(false)
    }

    /// Number of marked slots in one category.
    pub fn quarter_count(&self, category: DutyCategory) -> usize {
        self.row(category).iter().filter(|active| **active).count()
    }

    /// True if no slot in any row is marked.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|active| !active)
    }
}

impl Serialize for DutyGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DutyGrid", 4)?;
        for category in DutyCategory::ALL {
            state.serialize_field(category.as_str(), self.row(category).as_slice())?;
        }
        state.end()
    }
}

/// Builds the grid for an ordered event list.
pub fn map_events<E: GridEvent>(events: &[E]) -> DutyGrid {
    DutyGrid::from_events(events)
}
