//! Itinerary type: a complete bookable option.

use super::{Airline, DomainError, Journey, StopClass, TripType};

/// A bookable flight option: an outbound journey, an optional return
/// journey, and a price for the whole trip.
///
/// The filter and sort keys (`price`, `duration_minutes`, `departure_hour`,
/// `arrival_hour`, `stop_class`) describe the outbound journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    id: u32,
    airline: Airline,
    date: String,
    return_date: Option<String>,
    outbound: Journey,
    inbound: Option<Journey>,
    price: u64,
    currency: String,
}

impl Itinerary {
    /// A one-way itinerary.
    ///
    /// `date` is the travel date exactly as the search form supplied it.
    pub fn one_way(
        id: u32,
        airline: Airline,
        date: impl Into<String>,
        outbound: Journey,
        price: u64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id,
            airline,
            date: date.into(),
            return_date: None,
            outbound,
            inbound: None,
            price,
            currency: currency.into(),
        }
    }

    /// Turn this into a round trip by adding the return journey.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ReturnMismatch`] unless `inbound` starts where
    /// the outbound journey ends and ends where it starts.
    pub fn with_return(
        self,
        inbound: Journey,
        return_date: Option<String>,
    ) -> Result<Self, DomainError> {
        if inbound.origin() != self.outbound.destination()
            || inbound.destination() != self.outbound.origin()
        {
            return Err(DomainError::ReturnMismatch {
                expected_from: self.outbound.destination().clone(),
                expected_to: self.outbound.origin().clone(),
                found_from: inbound.origin().clone(),
                found_to: inbound.destination().clone(),
            });
        }
        Ok(self.attach_return(inbound, return_date))
    }

    /// Attach a return journey the caller built from the outbound endpoints.
    pub(crate) fn attach_return(mut self, inbound: Journey, return_date: Option<String>) -> Self {
        debug_assert_eq!(inbound.origin(), self.outbound.destination());
        debug_assert_eq!(inbound.destination(), self.outbound.origin());
        self.inbound = Some(inbound);
        self.return_date = return_date;
        self
    }

    /// Sequential identifier, unique within one search.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the carrier operating every flight.
    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    /// Returns the outbound travel date as the search supplied it.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the return date as the search supplied it, if any.
    pub fn return_date(&self) -> Option<&str> {
        self.return_date.as_deref()
    }

    /// Whether this is a round trip.
    ///
    /// Not stored: an itinerary is a round trip exactly when it has an
    /// [`inbound`](Self::inbound) journey.
    pub fn trip_type(&self) -> TripType {
        if self.inbound.is_some() {
            TripType::RoundTrip
        } else {
            TripType::OneWay
        }
    }

    /// Returns the outbound journey.
    pub fn outbound(&self) -> &Journey {
        &self.outbound
    }

    /// Returns the return journey of a round trip.
    pub fn inbound(&self) -> Option<&Journey> {
        self.inbound.as_ref()
    }

    /// Total price for the trip, in whole units of `currency`.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// ISO 4217 code the price is quoted in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Stop class of the outbound journey.
    pub fn stop_class(&self) -> StopClass {
        self.outbound.stop_class()
    }

    /// Outbound door-to-door duration in minutes.
    pub fn duration_minutes(&self) -> u64 {
        self.outbound.total_duration().num_minutes().max(0) as u64
    }

    /// Hour of day (0-23) the outbound journey departs.
    pub fn departure_hour(&self) -> u32 {
        self.outbound.departure_hour()
    }

    /// Hour of day (0-23) the outbound journey lands.
    pub fn arrival_hour(&self) -> u32 {
        self.outbound.arrival_hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirlineCode, AirportCode, JourneyBuilder};
    use chrono::{Duration, NaiveTime};

    fn code(s: &str) -> AirportCode {
        AirportCode::new(s).unwrap()
    }

    fn airline() -> Airline {
        let ba = AirlineCode::parse("BA").unwrap();
        Airline::new(ba, "British Airways", "/images/airlines/british-airways.png")
    }

    fn direct(from: &str, to: &str, hour: u32, mins: i64) -> Journey {
        JourneyBuilder::new(
            airline(),
            code(from),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        )
        .fly(code(to), Duration::minutes(mins), 75, "Boeing 787-9")
        .build()
        .unwrap()
    }

    #[test]
    fn one_way_fields() {
        let it = Itinerary::one_way(
            3,
            airline(),
            "2026-01-10",
            direct("LOS", "LON", 23, 400),
            780_000,
            "NGN",
        );

        assert_eq!(it.id(), 3);
        assert_eq!(it.trip_type(), TripType::OneWay);
        assert_eq!(it.date(), "2026-01-10");
        assert_eq!(it.return_date(), None);
        assert!(it.inbound().is_none());
        assert_eq!(it.price(), 780_000);
        assert_eq!(it.currency(), "NGN");
        assert_eq!(it.stop_class(), StopClass::NonStop);
        assert_eq!(it.duration_minutes(), 400);
        assert_eq!(it.departure_hour(), 23);
        assert_eq!(it.arrival_hour(), 5);
    }

    #[test]
    fn round_trip_must_retrace_route() {
        let it = Itinerary::one_way(1, airline(), "2026-01-10", direct("LOS", "LON", 9, 400), 1, "NGN");

        let ok = it
            .clone()
            .with_return(direct("LON", "LOS", 14, 390), Some("2026-01-20".into()))
            .unwrap();
        assert_eq!(ok.trip_type(), TripType::RoundTrip);
        assert_eq!(ok.return_date(), Some("2026-01-20"));
        assert_eq!(ok.inbound().unwrap().origin(), &code("LON"));

        let err = it
            .with_return(direct("LON", "ABV", 14, 390), None)
            .unwrap_err();
        assert!(matches!(err, DomainError::ReturnMismatch { .. }));
    }

    #[test]
    fn sort_keys_follow_outbound() {
        let it = Itinerary::one_way(1, airline(), "2026-01-10", direct("LOS", "LON", 9, 400), 1, "NGN")
            .with_return(direct("LON", "LOS", 20, 500), None)
            .unwrap();

        assert_eq!(it.duration_minutes(), 400);
        assert_eq!(it.departure_hour(), 9);
    }
}
