//! Airline and flight number types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid airline designator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airline code: {reason}")]
pub struct InvalidAirlineCode {
    reason: &'static str,
}

/// A valid 2-character IATA airline designator.
///
/// Designators are two uppercase ASCII letters or digits (e.g. "EK" for
/// Emirates, "P4" for Air Peace).
///
/// # Examples
///
/// ```
/// use flight_finder::domain::AirlineCode;
///
/// let ek = AirlineCode::parse("EK").unwrap();
/// assert_eq!(ek.as_str(), "EK");
///
/// assert!(AirlineCode::parse("P4").is_ok());
/// assert!(AirlineCode::parse("ek").is_err());
/// assert!(AirlineCode::parse("EKX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirlineCode([u8; 2]);

impl AirlineCode {
    /// Parse a designator from a string.
    ///
    /// The input must be exactly 2 characters, each an uppercase ASCII letter
    /// or a digit.
    pub fn parse(s: &str) -> Result<Self, InvalidAirlineCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidAirlineCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidAirlineCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(AirlineCode([bytes[0], bytes[1]]))
    }

    /// Returns the designator as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl TryFrom<String> for AirlineCode {
    type Error = InvalidAirlineCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AirlineCode> for String {
    fn from(code: AirlineCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Debug for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirlineCode({})", self.as_str())
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A carrier from the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airline {
    /// IATA designator, used for flight numbers
    pub code: AirlineCode,
    /// Display name, also the value the airline filter matches on
    pub name: String,
    /// Logo reference (an asset path)
    pub logo: String,
}

impl Airline {
    pub fn new(code: AirlineCode, name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            logo: logo.into(),
        }
    }
}

/// A marketed flight number, e.g. `EK 431`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightNumber {
    pub airline: AirlineCode,
    pub number: u16,
}

impl FlightNumber {
    pub fn new(airline: AirlineCode, number: u16) -> Self {
        Self { airline, number }
    }
}

impl fmt::Debug for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightNumber({} {})", self.airline, self.number)
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.airline, self.number)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(s in "[A-Z0-9]{2}") {
            let code = AirlineCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        #[test]
        fn lowercase_rejected(s in "[a-z]{2}") {
            prop_assert!(AirlineCode::parse(&s).is_err());
        }

        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,1}|[A-Z0-9]{3,8}") {
            prop_assert!(AirlineCode::parse(&s).is_err());
        }
    }
}
