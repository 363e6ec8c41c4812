//! Flight segment and layover types.

use chrono::{Duration, NaiveTime, Timelike};

use super::{AirportCode, Airline, FlightNumber};

/// One non-stop flight between two airports.
///
/// The arrival time is computed at construction as departure + duration,
/// wrapping past midnight, so the two can never disagree.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::{Airline, AirlineCode, AirportCode, FlightNumber, Segment};
/// use chrono::{Duration, NaiveTime};
///
/// let ek = AirlineCode::parse("EK").unwrap();
/// let segment = Segment::new(
///     AirportCode::new("LOS").unwrap(),
///     AirportCode::new("DXB").unwrap(),
///     NaiveTime::from_hms_opt(22, 15, 0).unwrap(),
///     Duration::minutes(7 * 60 + 10),
///     Airline::new(ek, "Emirates", "/images/airlines/emirates.png"),
///     FlightNumber::new(ek, 784),
///     "Boeing 777-300ER",
/// );
///
/// // Lands the next morning
/// assert_eq!(segment.arrival(), NaiveTime::from_hms_opt(5, 25, 0).unwrap());
/// assert_eq!(segment.arrival_day_offset(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    origin: AirportCode,
    destination: AirportCode,
    departure: NaiveTime,
    arrival: NaiveTime,
    duration: Duration,
    airline: Airline,
    flight_number: FlightNumber,
    aircraft: String,
}

impl Segment {
    /// Creates a segment; the arrival is derived from `departure + duration`.
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        departure: NaiveTime,
        duration: Duration,
        airline: Airline,
        flight_number: FlightNumber,
        aircraft: impl Into<String>,
    ) -> Self {
        let (arrival, _) = departure.overflowing_add_signed(duration);
        Self {
            origin,
            destination,
            departure,
            arrival,
            duration,
            airline,
            flight_number,
            aircraft: aircraft.into(),
        }
    }

    /// Returns the departure airport.
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Departure time of day.
    pub fn departure(&self) -> NaiveTime {
        self.departure
    }

    /// Arrival time of day (local to the departure clock; no time zones).
    pub fn arrival(&self) -> NaiveTime {
        self.arrival
    }

    /// Time in the air.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The carrying airline.
    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    /// Returns the marketed flight number, e.g. `EK 784`.
    pub fn flight_number(&self) -> FlightNumber {
        self.flight_number
    }

    /// Aircraft type label, e.g. "Airbus A350-900".
    pub fn aircraft(&self) -> &str {
        &self.aircraft
    }

    /// How many midnights the flight crosses.
    pub fn arrival_day_offset(&self) -> i64 {
        day_offset(self.departure, self.duration)
    }
}

/// The wait at a connecting airport between two segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layover {
    /// Connecting airport
    pub city: AirportCode,
    /// Time on the ground
    pub duration: Duration,
}

impl Layover {
    /// Creates a layover of `duration` at `city`.
    pub fn new(city: AirportCode, duration: Duration) -> Self {
        Self { city, duration }
    }
}

/// Number of midnights crossed when `elapsed` passes from `start`.
pub(crate) fn day_offset(start: NaiveTime, elapsed: Duration) -> i64 {
    let start_mins = i64::from(start.num_seconds_from_midnight() / 60);
    (start_mins + elapsed.num_minutes()).div_euclid(24 * 60)
}
