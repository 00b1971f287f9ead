//! Duty-status categories and the free-text status classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four rows of a daily log grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DutyCategory {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyCategory {
    /// All categories in grid row order.
    pub const ALL: [Self; 4] = [Self::OffDuty, Self::Sleeper, Self::Driving, Self::OnDuty];

    /// Canonical key used in JSON documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OffDuty => "off_duty",
            Self::Sleeper => "sleeper",
            Self::Driving => "driving",
            Self::OnDuty => "on_duty",
        }
    }

    /// Human-readable status name, used when an event has no `status_display`.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::OffDuty => "Off Duty",
            Self::Sleeper => "Sleeper Berth",
            Self::Driving => "Driving",
            Self::OnDuty => "On Duty (not driving)",
        }
    }

    /// Numbered label printed at the start of the grid row.
    #[must_use]
    pub const fn row_label(&self) -> &'static str {
        match self {
            Self::OffDuty => "1. Off Duty",
            Self::Sleeper => "2. Sleeper",
            Self::Driving => "3. Driving",
            Self::OnDuty => "4. On Duty",
        }
    }

    /// Position of this category's row in the grid.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::OffDuty => 0,
            Self::Sleeper => 1,
            Self::Driving => 2,
            Self::OnDuty => 3,
        }
    }
}

impl fmt::Display for DutyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DutyCategory {
    type Err = UnknownCategory;

    /// Parses a canonical key. Free-text labels go through [`classify`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off_duty" => Ok(Self::OffDuty),
            "sleeper" => Ok(Self::Sleeper),
            "driving" => Ok(Self::Driving),
            "on_duty" => Ok(Self::OnDuty),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl Serialize for DutyCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DutyCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for strings that are not a canonical category key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown duty category: {0}")]
pub struct UnknownCategory(String);

/// A single classification rule: any keyword match selects the category.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub category: DutyCategory,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules evaluated top to bottom; the first match wins.
///
/// Labels can satisfy several rules ("on break while driving"), so the order
/// is part of the contract. Anything unmatched falls through to
/// [`DutyCategory::OnDuty`].
pub const RULES: [Rule; 3] = [
    Rule {
        keywords: &["off", "break", "rest"],
        category: DutyCategory::OffDuty,
    },
    Rule {
        keywords: &["sleep"],
        category: DutyCategory::Sleeper,
    },
    Rule {
        keywords: &["driv"],
        category: DutyCategory::Driving,
    },
];

/// Maps a free-text duty-status label to its grid row.
///
/// Never fails: unrecognized labels are on duty.
pub fn classify(status: &str) -> DutyCategory {
    let lowered = status.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(DutyCategory::OnDuty, |rule| rule.category)
}
