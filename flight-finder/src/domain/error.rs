//! Domain error types.
//!
//! These errors represent validation failures in the domain layer: journeys
//! whose segments and layovers do not line up, and labels that do not name a
//! known stop class, time band or trip type.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Journey has no segments
    #[error("journey must have at least one segment")]
    EmptyJourney,

    /// Layovers must sit between segments, one per connection
    #[error("{segments} segments need {expected} layovers, got {layovers}", expected = .segments.saturating_sub(1))]
    LayoverCount { segments: usize, layovers: usize },

    /// More connections than the stop classes cover
    #[error("{0} stops is more than a journey can make")]
    TooManyStops(usize),

    /// Consecutive segments don't share an airport
    #[error("segments do not connect: arrives at {0}, next departs from {1}")]
    NotConnected(AirportCode, AirportCode),

    /// A layover names a different city than the connection it sits at
    #[error("layover at {found} but the connection is at {expected}")]
    LayoverCity {
        expected: AirportCode,
        found: AirportCode,
    },

    /// Next segment does not depart when the layover ends
    #[error("departure from {0} does not follow the layover")]
    ConnectionTiming(AirportCode),

    /// A segment or layover with zero or negative length
    #[error("non-positive duration at {0}")]
    NonPositiveDuration(AirportCode),

    /// Return journey does not retrace the outbound endpoints
    #[error("return journey runs {found_from}-{found_to}, expected {expected_from}-{expected_to}")]
    ReturnMismatch {
        expected_from: AirportCode,
        expected_to: AirportCode,
        found_from: AirportCode,
        found_to: AirportCode,
    },
}

/// Error returned when a display label does not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
