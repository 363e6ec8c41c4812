//! Filter criteria for the results list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, StopClass, TimeBand};

/// The user's current filter selections.
///
/// Each axis is a set of accepted values. An empty set places no
/// constraint on that axis; a non-empty set requires the itinerary's value
/// to be one of its members. Axes combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub stops: BTreeSet<StopClass>,
    /// Airline display names
    pub airlines: BTreeSet<String>,
    pub departure: BTreeSet<TimeBand>,
    pub arrival: BTreeSet<TimeBand>,
}

impl FilterState {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds stop classes to the selection.
    pub fn with_stops(mut self, stops: impl IntoIterator<Item = StopClass>) -> Self {
        self.stops.extend(stops);
        self
    }

    /// Adds airline display names to the selection.
    pub fn with_airlines<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.airlines.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds departure bands to the selection.
    pub fn with_departure(mut self, bands: impl IntoIterator<Item = TimeBand>) -> Self {
        self.departure.extend(bands);
        self
    }

    /// Adds arrival bands to the selection.
    pub fn with_arrival(mut self, bands: impl IntoIterator<Item = TimeBand>) -> Self {
        self.arrival.extend(bands);
        self
    }

    /// Flip a stop class in or out of the selection. Returns whether it is now selected.
    pub fn toggle_stop(&mut self, class: StopClass) -> bool {
        toggle(&mut self.stops, class)
    }

    /// Flips an airline in or out of the selection. Returns whether it is now selected.
    pub fn toggle_airline(&mut self, name: &str) -> bool {
        if self.airlines.remove(name) {
            false
        } else {
            self.airlines.insert(name.to_string())
        }
    }

    /// Flips a departure band. Returns whether it is now selected.
    pub fn toggle_departure(&mut self, band: TimeBand) -> bool {
        toggle(&mut self.departure, band)
    }

    /// Flips an arrival band. Returns whether it is now selected.
    pub fn toggle_arrival(&mut self, band: TimeBand) -> bool {
        toggle(&mut self.arrival, band)
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when nothing is selected on any axis.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
            && self.airlines.is_empty()
            && self.departure.is_empty()
            && self.arrival.is_empty()
    }

    /// Whether an itinerary passes every constrained axis.
    pub fn matches(&self, itinerary: &Itinerary) -> bool {
        self.matches_stops(itinerary)
            && self.matches_airline(itinerary)
            && self.matches_departure(itinerary)
            && self.matches_arrival(itinerary)
    }

    /// Whether the stop class is accepted.
    pub fn matches_stops(&self, itinerary: &Itinerary) -> bool {
        self.stops.is_empty() || self.stops.contains(&itinerary.stop_class())
    }

    /// Whether the airline is accepted, by display name.
    pub fn matches_airline(&self, itinerary: &Itinerary) -> bool {
        self.airlines.is_empty() || self.airlines.contains(&itinerary.airline().name)
    }

    /// Whether the departure hour falls in a selected band.
    pub fn matches_departure(&self, itinerary: &Itinerary) -> bool {
        self.departure.is_empty()
            || self
                .departure
                .contains(&TimeBand::of_hour(itinerary.departure_hour()))
    }

    /// Whether the arrival hour falls in a selected band.
    pub fn matches_arrival(&self, itinerary: &Itinerary) -> bool {
        self.arrival.is_empty()
            || self
                .arrival
                .contains(&TimeBand::of_hour(itinerary.arrival_hour()))
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::test_support::itinerary;

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FilterState::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&itinerary(1, 500, StopClass::NonStop, "Emirates", 6, 400)));
        assert!(filter.matches(&itinerary(2, 800, StopClass::TwoStop, "KLM", 23, 700)));
    }

    #[test]
    fn stops_filter() {
        let nonstop = itinerary(1, 500, StopClass::NonStop, "Emirates", 9, 400);
        let one_stop = itinerary(2, 800, StopClass::OneStop, "Emirates", 9, 600);

        let filter = FilterState::new().with_stops(["1 Stop".parse::<StopClass>().unwrap()]);

        assert!(!filter.matches(&nonstop));
        assert!(filter.matches(&one_stop));
    }

    #[test]
    fn airline_filter_matches_by_name() {
        let filter = FilterState::new().with_airlines(["Qatar Airways", "KLM"]);

        assert!(filter.matches(&itinerary(1, 500, StopClass::NonStop, "KLM", 9, 400)));
        assert!(!filter.matches(&itinerary(2, 500, StopClass::NonStop, "Emirates", 9, 400)));
    }

    #[test]
    fn departure_band_filter() {
        // Departs 06:00
        let early = itinerary(1, 500, StopClass::NonStop, "Emirates", 6, 400);

        assert!(FilterState::new().with_departure([TimeBand::Morning]).matches(&early));
        assert!(!FilterState::new().with_departure([TimeBand::Evening]).matches(&early));
    }

    #[test]
    fn arrival_band_tested_independently() {
        // Departs 20:00, 400 minutes later lands 02:40
        let red_eye = itinerary(1, 500, StopClass::NonStop, "Emirates", 20, 400);

        let evening_dep = FilterState::new().with_departure([TimeBand::Evening]);
        let night_arr = FilterState::new().with_arrival([TimeBand::Night]);
        let evening_arr = FilterState::new().with_arrival([TimeBand::Evening]);

        assert!(evening_dep.matches(&red_eye));
        assert!(night_arr.matches(&red_eye));
        assert!(!evening_arr.matches(&red_eye));
        assert!(evening_dep.clone().with_arrival([TimeBand::Night]).matches(&red_eye));
    }

    #[test]
    fn axes_combine_with_and() {
        let it = itinerary(1, 500, StopClass::OneStop, "Lufthansa", 14, 600);
        let filter = FilterState::new()
            .with_stops([StopClass::OneStop])
            .with_airlines(["Emirates"]);

        assert!(filter.matches_stops(&it));
        assert!(!filter.matches_airline(&it));
        assert!(!filter.matches(&it));
    }

    #[test]
    fn toggles_flip_membership() {
        let mut filter = FilterState::new();

        assert!(filter.toggle_stop(StopClass::TwoStop));
        assert!(filter.stops.contains(&StopClass::TwoStop));
        assert!(!filter.toggle_stop(StopClass::TwoStop));
        assert!(filter.stops.is_empty());

        assert!(filter.toggle_airline("Air Peace"));
        assert!(!filter.toggle_airline("Air Peace"));

        assert!(filter.toggle_departure(TimeBand::Night));
        assert!(filter.toggle_arrival(TimeBand::Morning));
        assert!(!filter.is_empty());

        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn deserializes_labels() {
        let filter: FilterState = serde_json::from_str(
            r#"{ "stops": ["Non-stop", "2 Stops"], "departure": ["Morning"] }"#,
        )
        .unwrap();

        assert_eq!(filter.stops.len(), 2);
        assert!(filter.departure.contains(&TimeBand::Morning));
        assert!(filter.airlines.is_empty());
    }
}
