//! Mock flight search.
//!
//! There is no inventory behind the search page: every result is made up
//! on the spot. This module draws plausible itineraries (direct, one-stop or
//! two-stop, with consistent times and layovers) from an injected random
//! source, so tests can pin the seed and get the same page every time.

mod catalog;
mod config;
mod mock;
mod request;
mod source;

use rand::Rng;

pub use catalog::{default_aircraft, default_airlines, default_one_stop_hubs, default_two_stop_hubs};
pub use config::{ConfigError, GeneratorConfig, MAX_LEG_MINUTES, MinuteRange, PriceBand};
pub use mock::FlightGenerator;
pub use request::SearchRequest;
pub use source::{ItinerarySource, MockItinerarySource};

use crate::domain::Itinerary;

/// Generate results for a search with the default configuration.
pub fn generate<R: Rng + ?Sized>(request: &SearchRequest, rng: &mut R) -> Vec<Itinerary> {
    FlightGenerator::default().generate(request, rng)
}
