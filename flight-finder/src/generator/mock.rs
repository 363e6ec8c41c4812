//! Mock itinerary generation.
//!
//! Produces plausible flight results without any inventory behind them:
//! airline, stop class, departure time, route and price are all drawn from
//! the injected random source according to a [`GeneratorConfig`].

use chrono::{Duration, NaiveTime};
use rand::Rng;
use tracing::{debug, trace};

use super::catalog::FLIGHT_NUMBERS;
use super::config::{ConfigError, GeneratorConfig};
use super::request::SearchRequest;
use crate::domain::{Airline, AirportCode, Itinerary, Journey, JourneyBuilder, StopClass};

/// Generates mock itineraries from a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct FlightGenerator {
    config: GeneratorConfig,
}

impl FlightGenerator {
    /// Create a generator, rejecting configurations it cannot draw from.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `itinerary_count` itineraries for a search, cheapest first.
    ///
    /// Ids run from 1 in generation order, so after sorting by price they
    /// are generally out of sequence. Results are not deduplicated. The same
    /// request and the same random state always produce the same output.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_finder::generator::{FlightGenerator, SearchRequest};
    /// use rand::SeedableRng;
    ///
    /// let generator = FlightGenerator::default();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let results = generator.generate(&SearchRequest::one_way("LOS", "LON", "2026-01-10"), &mut rng);
    ///
    /// assert_eq!(results.len(), 15);
    /// assert!(results.windows(2).all(|w| w[0].price() <= w[1].price()));
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &SearchRequest,
        rng: &mut R,
    ) -> Vec<Itinerary> {
        let origin = AirportCode::or_default(&request.origin, self.config.default_origin.as_str());
        let destination = AirportCode::or_default(
            &request.destination,
            self.config.default_destination.as_str(),
        );

        let mut itineraries = Vec::with_capacity(self.config.itinerary_count);
        for id in 1..=self.config.itinerary_count {
            let itinerary = self.itinerary(id as u32, request, &origin, &destination, rng);
            trace!(
                id = itinerary.id(),
                airline = %itinerary.airline().name,
                stops = %itinerary.stop_class(),
                price = itinerary.price(),
                "generated itinerary"
            );
            itineraries.push(itinerary);
        }

        // Stable, so equal prices keep generation order
        itineraries.sort_by_key(|it| it.price());

        debug!(
            origin = %origin,
            destination = %destination,
            trip = %request.trip_type,
            count = itineraries.len(),
            "generated mock itineraries"
        );

        itineraries
    }

    fn itinerary<R: Rng + ?Sized>(
        &self,
        id: u32,
        request: &SearchRequest,
        origin: &AirportCode,
        destination: &AirportCode,
        rng: &mut R,
    ) -> Itinerary {
        let airline = self.config.airlines[rng.gen_range(0..self.config.airlines.len())].clone();
        let class = self.stop_class(rng);

        let outbound = self.journey(&airline, class, origin, destination, false, rng);
        let base = self.price(class, rng);
        let round_trip = request.trip_type.is_round_trip();
        let price = if round_trip {
            scale(base, self.config.round_trip_multiplier)
        } else {
            base
        };

        let itinerary = Itinerary::one_way(
            id,
            airline.clone(),
            request.date.clone(),
            outbound,
            price,
            self.config.currency.clone(),
        );
        if !round_trip {
            return itinerary;
        }

        // Same carrier and stop class back, everything else drawn afresh
        let inbound = self.journey(&airline, class, destination, origin, true, rng);
        itinerary.attach_return(inbound, request.return_date.clone())
    }

    fn stop_class<R: Rng + ?Sized>(&self, rng: &mut R) -> StopClass {
        if rng.gen_bool(self.config.non_stop_probability) {
            StopClass::NonStop
        } else if rng.gen_bool(0.5) {
            StopClass::OneStop
        } else {
            StopClass::TwoStop
        }
    }

    /// Build one direction. `reverse` walks the fixed two-stop hubs backwards.
    fn journey<R: Rng + ?Sized>(
        &self,
        airline: &Airline,
        class: StopClass,
        from: &AirportCode,
        to: &AirportCode,
        reverse: bool,
        rng: &mut R,
    ) -> Journey {
        let departure = random_time_of_day(rng);
        let builder = JourneyBuilder::new(airline.clone(), from.clone(), departure);

        let builder = match class {
            StopClass::NonStop => {
                let flight = self.config.non_stop_minutes.sample(rng);
                self.fly(builder, to, flight, rng)
            }
            StopClass::OneStop => {
                let hub = self.one_stop_hub(from, to, rng);
                let first = self.config.one_stop_first_leg_minutes.sample(rng);
                let layover = self.config.one_stop_layover_minutes.sample(rng);
                let second = self.config.one_stop_second_leg_minutes.sample(rng);

                let builder = self.fly(builder, &hub, first, rng).connect(layover);
                self.fly(builder, to, second, rng)
            }
            StopClass::TwoStop => {
                let [mut first_hub, mut second_hub] = self.config.two_stop_hubs.clone();
                if reverse {
                    std::mem::swap(&mut first_hub, &mut second_hub);
                }
                let [leg1, leg2, leg3] = self.config.two_stop_legs();
                let [wait1, wait2] = self.config.two_stop_layovers();

                let builder = self.fly(builder, &first_hub, leg1, rng).connect(wait1);
                let builder = self.fly(builder, &second_hub, leg2, rng).connect(wait2);
                self.fly(builder, to, leg3, rng)
            }
        };

        builder.finish()
    }

    fn fly<R: Rng + ?Sized>(
        &self,
        builder: JourneyBuilder,
        to: &AirportCode,
        duration: Duration,
        rng: &mut R,
    ) -> JourneyBuilder {
        let number = rng.gen_range(FLIGHT_NUMBERS.0..=FLIGHT_NUMBERS.1);
        let aircraft = &self.config.aircraft[rng.gen_range(0..self.config.aircraft.len())];
        builder.fly(to.clone(), duration, number, aircraft.clone())
    }

    /// Draw a connecting airport, avoiding the journey's own endpoints when
    /// the catalog allows it.
    fn one_stop_hub<R: Rng + ?Sized>(
        &self,
        from: &AirportCode,
        to: &AirportCode,
        rng: &mut R,
    ) -> AirportCode {
        let hubs = &self.config.one_stop_hubs;
        let candidates: Vec<&AirportCode> =
            hubs.iter().filter(|h| *h != from && *h != to).collect();

        if candidates.is_empty() {
            hubs[rng.gen_range(0..hubs.len())].clone()
        } else {
            candidates[rng.gen_range(0..candidates.len())].clone()
        }
    }

    fn price<R: Rng + ?Sized>(&self, class: StopClass, rng: &mut R) -> u64 {
        let base = self.config.price_band(class).sample(rng);
        scale(u64::from(base), self.config.currency_multiplier)
    }
}

fn random_time_of_day<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let hour: i64 = rng.gen_range(0..24);
    let minute: i64 = rng.gen_range(0..60);
    NaiveTime::default()
        .overflowing_add_signed(Duration::minutes(hour * 60 + minute))
        .0
}

/// Multiply a price, rounding to whole units and never reaching zero.
fn scale(amount: u64, factor: f64) -> u64 {
    ((amount as f64) * factor).round().max(1.0) as u64
}
