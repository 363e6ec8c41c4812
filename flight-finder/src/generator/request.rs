//! Search form input.

use serde::{Deserialize, Serialize};

use crate::domain::TripType;

/// What the user typed into the flight search widget.
///
/// Codes and dates are kept as the free text the form produced; blank codes
/// are replaced by the configured defaults at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub trip_type: TripType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

impl SearchRequest {
    /// Create a one-way search.
    pub fn one_way(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            trip_type: TripType::OneWay,
            return_date: None,
        }
    }

    /// Create a round-trip search.
    pub fn round_trip(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        return_date: Option<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            trip_type: TripType::RoundTrip,
            return_date,
        }
    }
}
