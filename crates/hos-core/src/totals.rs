//! Recap totals computed from a duty grid.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::category::DutyCategory;
use crate::grid::{DutyGrid, SLOT_MINUTES};

/// A duration measured in whole quarter-hours, displayed as `H:MM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct HoursMinutes {
    quarters: usize,
}

impl HoursMinutes {
    pub const ZERO: Self = Self { quarters: 0 };

    pub const fn from_quarters(quarters: usize) -> Self {
        Self { quarters }
    }

    pub const fn quarters(self) -> usize {
        self.quarters
    }

    pub const fn total_minutes(self) -> usize {
        self.quarters * SLOT_MINUTES as usize
    }

    pub const fn hours(self) -> usize {
        self.total_minutes() / 60
    }

    pub const fn minutes(self) -> usize {
        self.total_minutes() % 60
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}

impl Serialize for HoursMinutes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Per-category durations plus the grand total.
///
/// The grand total is the sum of the four category counts, so overlapping
/// events in different categories can push it past `24:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    by_category: [HoursMinutes; 4],
    grand_total: HoursMinutes,
}

impl Totals {
    /// Duration recorded for one category.
    pub const fn get(&self, category: DutyCategory) -> HoursMinutes {
        self.by_category[category.row()]
    }

    pub const fn grand_total(&self) -> HoursMinutes {
        self.grand_total
    }
}

impl Serialize for Totals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Totals", 5)?;
        for category in DutyCategory::ALL {
            state.serialize_field(category.as_str(), &self.get(category))?;
        }
        state.serialize_field("grand_total", &self.grand_total)?;
        state.end()
    }
}

/// Counts marked slots per category and sums them into a grand total.
pub fn aggregate(grid: &DutyGrid) -> Totals {
    let by_category = DutyCategory::ALL.map(|category| HoursMinutes::from_quarters(grid.quarter_count(category)));
    let grand_total = HoursMinutes::from_quarters(by_category.iter().map(|d| d.quarters()).sum());
    Totals {
        by_category,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::grid::map_events;

    fn totals_for(events: &[Event]) -> Totals {
        aggregate(&map_events(events))
    }

    #[test]
    fn display_hours_and_minutes() {
        assert_eq!(HoursMinutes::from_quarters(10).to_string(), "2:30");
        assert_eq!(HoursMinutes::from_quarters(4).to_string(), "1:00");
        assert_eq!(HoursMinutes::from_quarters(96).to_string(), "24:00");
        assert_eq!(HoursMinutes::from_quarters(101).to_string(), "25:15");
    }

    #[test]
    fn display_under_an_hour_keeps_zero_hours() {
        assert_eq!(HoursMinutes::from_quarters(1).to_string(), "0:15");
        assert_eq!(HoursMinutes::from_quarters(3).to_string(), "0:45");
        assert_eq!(HoursMinutes::ZERO.to_string(), "0:00");
    }

    #[test]
    fn empty_grid_totals_are_zero() {
        let totals = totals_for(&[]);
        for category in DutyCategory::ALL {
            assert_eq!(totals.get(category).to_string(), "0:00");
        }
        assert_eq!(totals.grand_total().to_string(), "0:00");
    }

    #[test]
    fn start_only_event_is_a_quarter_hour() {
        let totals = totals_for(&[Event::new("2024-01-01T05:00:00Z", None::<String>, "sleeper")]);
        assert_eq!(totals.get(DutyCategory::Sleeper).to_string(), "0:15");
        assert_eq!(totals.grand_total().to_string(), "0:15");
    }

    #[test]
    fn two_and_a_half_hours_on_duty() {
        let totals = totals_for(&[Event::new(
            "2024-01-01T08:00:00Z",
            Some("2024-01-01T10:30:00Z"),
            "on_duty",
        )]);
        assert_eq!(totals.get(DutyCategory::OnDuty).to_string(), "2:30");
        assert_eq!(totals.get(DutyCategory::Driving).to_string(), "0:00");
    }

    #[test]
    fn grand_total_sums_overlapping_categories() {
        let totals = totals_for(&[
            Event::new("2024-01-01T00:00:00Z", Some("2024-01-01T23:45:00Z"), "off_duty"),
            Event::new("2024-01-01T08:00:00Z", Some("2024-01-01T12:00:00Z"), "driving"),
        ]);
        assert_eq!(totals.get(DutyCategory::OffDuty).to_string(), "23:45");
        assert_eq!(totals.get(DutyCategory::Driving).to_string(), "4:00");
        assert_eq!(totals.grand_total().quarters(), 95 + 16);
        assert_eq!(totals.grand_total().to_string(), "27:45");
    }

    #[test]
    fn serializes_display_strings() {
        let totals = totals_for(&[Event::new(
            "2024-01-01T06:00:00Z",
            Some("2024-01-01T08:00:00Z"),
            "driving",
        )]);
        let json = serde_json::to_string(&totals).unwrap();
        insta::assert_snapshot!(json, @r#"{"off_duty":"0:00","sleeper":"0:00","driving":"2:00","on_duty":"0:00","grand_total":"2:00"}"#);
    }
}
