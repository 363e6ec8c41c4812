//! Airport code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when an airport code is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("airport code must not be blank")]
pub struct BlankAirportCode;

/// An airport or city code such as `LOS` or `LON`.
///
/// Search widgets pass codes through as free text, so this type does not
/// insist on the 3-letter IATA shape. It only normalizes: surrounding
/// whitespace is trimmed and letters are upper-cased. The code is never empty.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::AirportCode;
///
/// let los = AirportCode::new(" los ").unwrap();
/// assert_eq!(los.as_str(), "LOS");
///
/// // Blank input is "missing"
/// assert!(AirportCode::new("   ").is_none());
///
/// let fallback = AirportCode::or_default("", "LON");
/// assert_eq!(fallback.as_str(), "LON");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Normalize a code, returning `None` if nothing is left after trimming.
    ///
    /// Use [`or_default`](Self::or_default) where a code is always needed;
    /// that constructor never fails.
    pub fn new(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(AirportCode(trimmed.to_uppercase()))
    }

    /// Normalize `s`, falling back to `default` when `s` is blank. Never fails.
    ///
    /// A blank `default` is replaced by `"XXX"` so the result is never empty.
    pub fn or_default(s: &str, default: &str) -> Self {
        Self::new(s)
            .or_else(|| Self::new(default))
            .unwrap_or_else(|| AirportCode("XXX".to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AirportCode {
    type Error = BlankAirportCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or(BlankAirportCode)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(AirportCode::new("los").unwrap().as_str(), "LOS");
        assert_eq!(AirportCode::new("  Lon\t").unwrap().as_str(), "LON");
        assert_eq!(AirportCode::new("JFK").unwrap().as_str(), "JFK");
    }

    #[test]
    fn blank_is_missing() {
        assert!(AirportCode::new("").is_none());
        assert!(AirportCode::new("   ").is_none());
        assert!(AirportCode::new("\n").is_none());
    }

    #[test]
    fn keeps_free_text() {
        // Not every widget sends IATA codes
        assert_eq!(AirportCode::new("Lagos").unwrap().as_str(), "LAGOS");
        assert_eq!(AirportCode::new("T5").unwrap().as_str(), "T5");
    }

    #[test]
    fn fallback_to_default() {
        assert_eq!(AirportCode::or_default("", "LOS").as_str(), "LOS");
        assert_eq!(AirportCode::or_default("abv", "LOS").as_str(), "ABV");
        assert_eq!(AirportCode::or_default("", " ").as_str(), "XXX");
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::new("dxb").unwrap();
        assert_eq!(format!("{}", code), "DXB");
        assert_eq!(format!("{:?}", code), "AirportCode(DXB)");
    }

    #[test]
    fn deserialize_normalizes() {
        let code: AirportCode = serde_json::from_str("\"cdg\"").unwrap();
        assert_eq!(code.as_str(), "CDG");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CDG\"");

        let blank: Result<AirportCode, _> = serde_json::from_str("\"  \"");
        assert!(blank.is_err());
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AirportCode::new("LOS").unwrap());
        assert!(set.contains(&AirportCode::new("los").unwrap()));
        assert!(!set.contains(&AirportCode::new("LON").unwrap()));
    }
}
