//! Stop classification of a journey.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseLabelError;

/// How many intermediate stops a journey makes.
///
/// The display labels (`Non-stop`, `1 Stop`, `2 Stops`) are also the values
/// the stops filter is expressed in.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::StopClass;
///
/// let class: StopClass = "1 Stop".parse().unwrap();
/// assert_eq!(class, StopClass::OneStop);
/// assert_eq!(class.to_string(), "1 Stop");
/// assert_eq!(StopClass::from_stops(0), Some(StopClass::NonStop));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StopClass {
    #[serde(rename = "Non-stop")]
    NonStop,
    #[serde(rename = "1 Stop")]
    OneStop,
    #[serde(rename = "2 Stops")]
    TwoStop,
}

impl StopClass {
    /// All classes, in display order.
    pub const ALL: [StopClass; 3] = [StopClass::NonStop, StopClass::OneStop, StopClass::TwoStop];

    /// Classify by number of intermediate stops. More than two is not modelled.
    pub fn from_stops(stops: usize) -> Option<Self> {
        match stops {
            0 => Some(StopClass::NonStop),
            1 => Some(StopClass::OneStop),
            2 => Some(StopClass::TwoStop),
            _ => None,
        }
    }

    /// Number of intermediate stops (equal to the number of layovers).
    pub fn stops(self) -> usize {
        match self {
            StopClass::NonStop => 0,
            StopClass::OneStop => 1,
            StopClass::TwoStop => 2,
        }
    }

    /// Number of flight segments a journey of this class has.
    pub fn segment_count(self) -> usize {
        self.stops() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            StopClass::NonStop => "Non-stop",
            StopClass::OneStop => "1 Stop",
            StopClass::TwoStop => "2 Stops",
        }
    }
}

impl fmt::Display for StopClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StopClass {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "non-stop" | "nonstop" | "non stop" | "direct" | "0" => Ok(StopClass::NonStop),
            "1 stop" | "1-stop" | "one-stop" | "one stop" | "1" => Ok(StopClass::OneStop),
            "2 stops" | "2 stop" | "2-stop" | "two-stop" | "two stops" | "2" => {
                Ok(StopClass::TwoStop)
            }
            _ => Err(ParseLabelError::new("stop class", s)),
        }
    }
}
