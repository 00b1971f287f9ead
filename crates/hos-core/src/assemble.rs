//! Splitting planner events into per-day sheets.
//!
//! An event that crosses UTC midnight is cut into pieces: each piece but the
//! last ends at `23:59:59.999999` of its day and the next starts at the
//! following midnight. Pieces are grouped by the UTC date of their start,
//! in the order dates are first seen.
//!
//! Nothing here validates the schedule: gaps and overlaps pass through.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};

use crate::event::{Event, GridEvent};
use crate::sheet::LogSheet;

/// Last representable instant of `date`, as the planner writes it.
fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_micro_opt(23, 59, 59, 999_999)
        .map(|naive| naive.and_utc())
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Cuts one event at every UTC midnight it crosses.
///
/// Events with no parseable start are dropped. Events without a parseable
/// end, or ending on or before their start, are returned unchanged.
pub fn split_at_midnight(event: &Event) -> Vec<Event> {
    let Some(start) = event.start() else {
        tracing::debug!(status = %event.status, "dropping event without usable start time");
        return Vec::new();
    };
    let Some(end) = event.end().filter(|end| *end > start) else {
        return vec![event.clone()];
    };

    let mut pieces = Vec::new();
    let mut piece_start = start;
    let mut piece_start_raw = event.start_time.clone();
    let mut order_index = event.order_index;

    while piece_start.date_naive() != end.date_naive() {
        let Some(day_end) = end_of_day(piece_start.date_naive()) else {
            break;
        };
        pieces.push(Event {
            start_time: piece_start_raw.take(),
            end_time: Some(format_timestamp(day_end)),
            order_index,
            ..event.clone()
        });

        order_index = order_index.map(|i| i + 1);
        piece_start = day_end + Duration::microseconds(1);
        piece_start_raw = Some(format_timestamp(piece_start));
    }

    // A piece ending exactly at midnight leaves nothing on the next day.
    if pieces.is_empty() || piece_start < end {
        pieces.push(Event {
            start_time: piece_start_raw,
            end_time: event.end_time.clone(),
            order_index,
            ..event.clone()
        });
    }

    pieces
}

/// Splits events at midnight and groups the pieces into daily sheets.
pub fn assemble_sheets(events: &[Event]) -> Vec<LogSheet> {
    let mut sheets: Vec<LogSheet> = Vec::new();
    let mut by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for piece in events.iter().flat_map(split_at_midnight) {
        let Some(date) = piece.start().map(|start| start.date_naive()) else {
            continue;
        };
        let index = *by_date.entry(date).or_insert_with(|| {
            sheets.push(LogSheet::new(date, Vec::new()));
            sheets.len() - 1
        });
        sheets[index].events.push(piece);
    }

    tracing::debug!(events = events.len(), sheets = sheets.len(), "assembled sheets");
    sheets
}
