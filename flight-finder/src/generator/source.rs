//! The seam between result pages and wherever itineraries come from.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::mock::FlightGenerator;
use super::request::SearchRequest;
use crate::domain::Itinerary;

/// Something that can answer a flight search.
///
/// The results session only talks to this trait, so the mock generator can
/// be swapped for a real fares backend without touching filtering or display.
pub trait ItinerarySource {
    /// Return candidate itineraries for a search, cheapest first.
    fn search(&mut self, request: &SearchRequest) -> Vec<Itinerary>;
}

/// An [`ItinerarySource`] backed by [`FlightGenerator`] and its own RNG.
#[derive(Debug, Clone)]
pub struct MockItinerarySource<R = StdRng> {
    generator: FlightGenerator,
    rng: R,
}

impl<R: rand::Rng> MockItinerarySource<R> {
    pub fn new(generator: FlightGenerator, rng: R) -> Self {
        Self { generator, rng }
    }

    pub fn generator(&self) -> &FlightGenerator {
        &self.generator
    }
}

impl MockItinerarySource<StdRng> {
    /// Reproducible results: the same seed answers the same searches identically.
    pub fn seeded(generator: FlightGenerator, seed: u64) -> Self {
        Self::new(generator, StdRng::seed_from_u64(seed))
    }

    /// Fresh results on every run.
    pub fn from_entropy(generator: FlightGenerator) -> Self {
        Self::new(generator, StdRng::from_entropy())
    }
}

impl<R: rand::Rng> ItinerarySource for MockItinerarySource<R> {
    fn search(&mut self, request: &SearchRequest) -> Vec<Itinerary> {
        self.generator.generate(request, &mut self.rng)
    }
}
