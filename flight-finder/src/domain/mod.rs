//! Domain types for flight search results.
//!
//! Everything here is a validated value: codes are normalized, journeys are
//! checked for connected segments and consistent timing, and round trips are
//! checked to retrace their outbound route. Code that receives these types can
//! rely on those invariants.

mod airline;
mod airport;
mod error;
mod itinerary;
mod journey;
mod segment;
mod stop_class;
mod time_band;
mod trip;

pub use airline::{Airline, AirlineCode, FlightNumber, InvalidAirlineCode};
pub use airport::{AirportCode, BlankAirportCode};
pub use error::{DomainError, ParseLabelError};
pub use itinerary::Itinerary;
pub use journey::{Journey, JourneyBuilder};
pub use segment::{Layover, Segment};
pub use stop_class::StopClass;
pub use time_band::TimeBand;
pub use trip::TripType;
