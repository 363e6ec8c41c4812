//! Per-filter price hints.
//!
//! Next to every filter option the results page shows the cheapest fare
//! available under it, computed over the full unfiltered result set, so the
//! user can see what relaxing a filter would unlock.

use std::collections::BTreeMap;

use crate::domain::{Itinerary, StopClass, TimeBand};

/// How many results carry a filter value, and the cheapest of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facet {
    pub count: usize,
    pub min_price: u64,
}

/// Facets for every filter axis over an unfiltered result set.
///
/// Values that no itinerary carries are absent from the maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSummary {
    pub total: usize,
    pub cheapest: Option<u64>,
    pub fastest_minutes: Option<u64>,
    pub stops: BTreeMap<StopClass, Facet>,
    pub airlines: BTreeMap<String, Facet>,
    pub departure: BTreeMap<TimeBand, Facet>,
    pub arrival: BTreeMap<TimeBand, Facet>,
}

impl PriceSummary {
    pub fn from_itineraries(itineraries: &[Itinerary]) -> Self {
        let mut summary = PriceSummary {
            total: itineraries.len(),
            cheapest: itineraries.iter().map(|it| it.price()).min(),
            fastest_minutes: itineraries.iter().map(|it| it.duration_minutes()).min(),
            ..Default::default()
        };

        for it in itineraries {
            let price = it.price();
            record(&mut summary.stops, it.stop_class(), price);
            record(&mut summary.airlines, it.airline().name.clone(), price);
            record(
                &mut summary.departure,
                TimeBand::of_hour(it.departure_hour()),
                price,
            );
            record(
                &mut summary.arrival,
                TimeBand::of_hour(it.arrival_hour()),
                price,
            );
        }

        summary
    }

    pub fn min_price_for_stop(&self, class: StopClass) -> Option<u64> {
        self.stops.get(&class).map(|f| f.min_price)
    }

    pub fn min_price_for_airline(&self, name: &str) -> Option<u64> {
        self.airlines.get(name).map(|f| f.min_price)
    }

    pub fn min_price_departing(&self, band: TimeBand) -> Option<u64> {
        self.departure.get(&band).map(|f| f.min_price)
    }

    pub fn min_price_arriving(&self, band: TimeBand) -> Option<u64> {
        self.arrival.get(&band).map(|f| f.min_price)
    }
}

fn record<K: Ord>(map: &mut BTreeMap<K, Facet>, key: K, price: u64) {
    map.entry(key)
        .and_modify(|facet| {
            facet.count += 1;
            facet.min_price = facet.min_price.min(price);
        })
        .or_insert(Facet {
            count: 1,
            min_price: price,
        });
}
