//! Journey types.
//!
//! A `Journey` is one direction of travel: one or more flight segments with
//! a layover between each consecutive pair.

use chrono::{Duration, NaiveTime, Timelike};

use super::segment::day_offset;
use super::{Airline, AirportCode, DomainError, FlightNumber, Layover, Segment, StopClass};

/// One direction of an itinerary.
///
/// # Invariants
///
/// - At least one segment and at most three (two stops)
/// - `layovers.len() + 1 == segments.len()`
/// - Consecutive segments connect (destination of one = origin of next)
/// - Each layover sits at the airport it connects
/// - Each segment departs exactly when the preceding layover ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    segments: Vec<Segment>,
    layovers: Vec<Layover>,
}

impl Journey {
    /// Constructs a journey from segments and the layovers between them.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any invariant listed on [`Journey`] does not hold, or
    /// if a segment or layover has a non-positive duration.
    pub fn new(segments: Vec<Segment>, layovers: Vec<Layover>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        if layovers.len() + 1 != segments.len() {
            return Err(DomainError::LayoverCount {
                segments: segments.len(),
                layovers: layovers.len(),
            });
        }

        if StopClass::from_stops(layovers.len()).is_none() {
            return Err(DomainError::TooManyStops(layovers.len()));
        }

        for segment in &segments {
            if segment.duration() <= Duration::zero() {
                return Err(DomainError::NonPositiveDuration(segment.origin().clone()));
            }
        }

        for (window, layover) in segments.windows(2).zip(&layovers) {
            let (prev, next) = (&window[0], &window[1]);

            if prev.destination() != next.origin() {
                return Err(DomainError::NotConnected(
                    prev.destination().clone(),
                    next.origin().clone(),
                ));
            }
            if &layover.city != prev.destination() {
                return Err(DomainError::LayoverCity {
                    expected: prev.destination().clone(),
                    found: layover.city.clone(),
                });
            }
            if layover.duration <= Duration::zero() {
                return Err(DomainError::NonPositiveDuration(layover.city.clone()));
            }
            let (expected_departure, _) = prev.arrival().overflowing_add_signed(layover.duration);
            if next.departure() != expected_departure {
                return Err(DomainError::ConnectionTiming(next.origin().clone()));
            }
        }

        Ok(Journey { segments, layovers })
    }

    /// All segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All layovers in order; `layovers()[i]` sits between segments `i` and `i + 1`.
    pub fn layovers(&self) -> &[Layover] {
        &self.layovers
    }

    /// Returns the number of flights.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Classifies the journey by its number of stops.
    pub fn stop_class(&self) -> StopClass {
        // Bounded at construction
        StopClass::from_stops(self.layovers.len()).unwrap_or(StopClass::TwoStop)
    }

    /// True for a single non-stop flight.
    pub fn is_direct(&self) -> bool {
        self.layovers.is_empty()
    }

    /// Returns the airport the first flight leaves from.
    pub fn origin(&self) -> &AirportCode {
        self.first().origin()
    }

    /// Returns the airport the last flight lands at.
    pub fn destination(&self) -> &AirportCode {
        self.last().destination()
    }

    /// Departure time of the first segment.
    pub fn departure(&self) -> NaiveTime {
        self.first().departure()
    }

    /// Arrival time of the last segment.
    pub fn arrival(&self) -> NaiveTime {
        self.last().arrival()
    }

    /// Hour of day (0-23) the journey departs.
    pub fn departure_hour(&self) -> u32 {
        self.departure().hour()
    }

    /// Hour of day (0-23) the journey lands.
    pub fn arrival_hour(&self) -> u32 {
        self.arrival().hour()
    }

    /// Time in the air.
    pub fn flight_time(&self) -> Duration {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Time on the ground between flights.
    pub fn layover_time(&self) -> Duration {
        self.layovers.iter().map(|l| l.duration).sum()
    }

    /// Door-to-door duration: flight time plus layover time.
    pub fn total_duration(&self) -> Duration {
        self.flight_time() + self.layover_time()
    }

    /// How many midnights pass between departure and final arrival.
    pub fn arrival_day_offset(&self) -> i64 {
        day_offset(self.departure(), self.total_duration())
    }

    /// Connecting airports, in order.
    pub fn stops(&self) -> impl Iterator<Item = &AirportCode> {
        self.layovers.iter().map(|l| &l.city)
    }

    fn first(&self) -> &Segment {
        // Non-empty by construction
        &self.segments[0]
    }

    fn last(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }
}

/// Builds a journey one flight at a time.
///
/// Each flight departs from where the previous one landed, once the layover
/// has elapsed, so the result satisfies the connection invariants without
/// further checks.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::{Airline, AirlineCode, AirportCode, JourneyBuilder, StopClass};
/// use chrono::{Duration, NaiveTime};
///
/// let tk = AirlineCode::parse("TK").unwrap();
/// let airline = Airline::new(tk, "Turkish Airlines", "/images/airlines/turkish.png");
/// let code = |s| AirportCode::new(s).unwrap();
///
/// let journey = JourneyBuilder::new(airline, code("LOS"), NaiveTime::from_hms_opt(9, 0, 0).unwrap())
///     .fly(code("IST"), Duration::minutes(200), 1588, "Airbus A330-300")
///     .connect(Duration::minutes(120))
///     .fly(code("LON"), Duration::minutes(230), 1979, "Airbus A321neo")
///     .build()
///     .unwrap();
///
/// assert_eq!(journey.stop_class(), StopClass::OneStop);
/// assert_eq!(journey.total_duration(), Duration::minutes(550));
/// ```
#[derive(Debug, Clone)]
pub struct JourneyBuilder {
    airline: Airline,
    position: AirportCode,
    clock: NaiveTime,
    pending_layover: Option<Duration>,
    segments: Vec<Segment>,
    layovers: Vec<Layover>,
}

impl JourneyBuilder {
    /// Start at `origin`, with the first flight leaving at `departure`.
    pub fn new(airline: Airline, origin: AirportCode, departure: NaiveTime) -> Self {
        Self {
            airline,
            position: origin,
            clock: departure,
            pending_layover: None,
            segments: Vec::with_capacity(3),
            layovers: Vec::with_capacity(2),
        }
    }

    /// Fly from the current airport to `destination`.
    ///
    /// After the first flight, call [`connect`](Self::connect) before each
    /// further flight; without it the connection defaults to zero minutes and
    /// [`build`](Self::build) rejects the journey.
    pub fn fly(
        mut self,
        destination: AirportCode,
        duration: Duration,
        number: u16,
        aircraft: impl Into<String>,
    ) -> Self {
        if !self.segments.is_empty() {
            let wait = self.pending_layover.take().unwrap_or_else(Duration::zero);
            self.layovers.push(Layover::new(self.position.clone(), wait));
            self.clock = self.clock.overflowing_add_signed(wait).0;
        }

        let segment = Segment::new(
            self.position.clone(),
            destination.clone(),
            self.clock,
            duration,
            self.airline.clone(),
            FlightNumber::new(self.airline.code, number),
            aircraft,
        );
        self.clock = segment.arrival();
        self.position = destination;
        self.segments.push(segment);
        self
    }

    /// Wait `duration` at the current airport before the next flight.
    pub fn connect(mut self, duration: Duration) -> Self {
        self.pending_layover = Some(duration);
        self
    }

    /// Finish the journey.
    pub fn build(self) -> Result<Journey, DomainError> {
        Journey::new(self.segments, self.layovers)
    }

    /// Finish a journey whose flights and connections all have positive
    /// durations and which makes at most two stops.
    pub(crate) fn finish(self) -> Journey {
        debug_assert!(
            Journey::new(self.segments.clone(), self.layovers.clone()).is_ok(),
            "builder produced an invalid journey"
        );
        Journey {
            segments: self.segments,
            layovers: self.layovers,
        }
    }
}
