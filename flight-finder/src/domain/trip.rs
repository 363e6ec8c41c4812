//! Trip type selected in the search widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseLabelError;

/// One way or return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    pub fn is_round_trip(self) -> bool {
        self == TripType::RoundTrip
    }

    pub fn label(self) -> &'static str {
        match self {
            TripType::OneWay => "oneWay",
            TripType::RoundTrip => "roundTrip",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TripType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oneway" | "one-way" | "one way" | "one_way" => Ok(TripType::OneWay),
            "roundtrip" | "round-trip" | "round trip" | "round_trip" | "return" => {
                Ok(TripType::RoundTrip)
            }
            _ => Err(ParseLabelError::new("trip type", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trip_types() {
        assert_eq!("oneWay".parse::<TripType>().unwrap(), TripType::OneWay);
        assert_eq!("one-way".parse::<TripType>().unwrap(), TripType::OneWay);
        assert_eq!("roundTrip".parse::<TripType>().unwrap(), TripType::RoundTrip);
        assert_eq!("return".parse::<TripType>().unwrap(), TripType::RoundTrip);
        assert!("multi-city".parse::<TripType>().is_err());
    }

    #[test]
    fn serde_uses_camel_case() {
        assert_eq!(
            serde_json::to_string(&TripType::RoundTrip).unwrap(),
            "\"roundTrip\""
        );
        assert_eq!(
            serde_json::from_str::<TripType>("\"oneWay\"").unwrap(),
            TripType::OneWay
        );
    }

    #[test]
    fn default_is_one_way() {
        assert_eq!(TripType::default(), TripType::OneWay);
        assert!(!TripType::default().is_round_trip());
    }
}
