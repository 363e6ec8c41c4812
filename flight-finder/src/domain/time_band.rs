//! Coarse time-of-day bands used by the departure and arrival filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseLabelError;

/// A part of the day.
///
/// | Band      | Hours     |
/// |-----------|-----------|
/// | Night     | [0, 5)    |
/// | Morning   | [5, 12)   |
/// | Afternoon | [12, 18)  |
/// | Evening   | [18, 24)  |
///
/// # Examples
///
/// ```
/// use flight_finder::domain::TimeBand;
///
/// assert_eq!(TimeBand::of_hour(6), TimeBand::Morning);
/// assert_eq!(TimeBand::of_hour(4), TimeBand::Night);
/// assert_eq!(TimeBand::of_hour(18), TimeBand::Evening);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeBand {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBand {
    /// All bands, in display order.
    pub const ALL: [TimeBand; 4] = [
        TimeBand::Morning,
        TimeBand::Afternoon,
        TimeBand::Evening,
        TimeBand::Night,
    ];

    /// The band an hour of the day falls in. Hours past 23 wrap.
    pub fn of_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=11 => TimeBand::Morning,
            12..=17 => TimeBand::Afternoon,
            18..=23 => TimeBand::Evening,
            _ => TimeBand::Night,
        }
    }

    /// Whether `hour` falls in this band.
    pub fn contains(self, hour: u32) -> bool {
        Self::of_hour(hour) == self
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeBand::Morning => "Morning",
            TimeBand::Afternoon => "Afternoon",
            TimeBand::Evening => "Evening",
            TimeBand::Night => "Night",
        }
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeBand {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeBand::Morning),
            "afternoon" => Ok(TimeBand::Afternoon),
            "evening" => Ok(TimeBand::Evening),
            "night" => Ok(TimeBand::Night),
            _ => Err(ParseLabelError::new("time band", s)),
        }
    }
}
