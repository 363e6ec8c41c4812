//! Filtering, ordering and summarising a set of search results.

mod filter;
mod session;
mod sort;
mod summary;

pub use filter::FilterState;
pub use session::ResultsSession;
pub use sort::{SortKey, sort_itineraries};
pub use summary::{Facet, PriceSummary};

use tracing::trace;

use crate::domain::Itinerary;

/// Select the itineraries matching `filters`, ordered by `sort`.
///
/// The input is left untouched. Itineraries that tie on the sort key keep
/// their input order.
pub fn apply(itineraries: &[Itinerary], filters: &FilterState, sort: SortKey) -> Vec<Itinerary> {
    let mut shown: Vec<Itinerary> = itineraries
        .iter()
        .filter(|it| filters.matches(it))
        .cloned()
        .collect();
    sort_itineraries(&mut shown, sort);

    trace!(
        matched = shown.len(),
        total = itineraries.len(),
        %sort,
        "filters applied"
    );
    shown
}


#[cfg(test)]
mod tests {
    use super::test_support::itinerary;
    use super::*;
    use crate::domain::{StopClass, TimeBand};
    use crate::generator::{FlightGenerator, SearchRequest};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids(itineraries: &[Itinerary]) -> Vec<u32> {
        itineraries.iter().map(Itinerary::id).collect()
    }

    #[test]
    fn filter_by_stops_then_sort_by_price() {
        let all = vec![
            itinerary(1, 500, StopClass::NonStop, "Emirates", 9, 400),
            itinerary(2, 800, StopClass::OneStop, "Emirates", 9, 600),
        ];
        let filters = FilterState::new().with_stops([StopClass::OneStop]);

        let shown = apply(&all, &filters, SortKey::Cheapest);

        assert_eq!(ids(&shown), vec![2]);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn empty_filters_keep_everything() {
        let all = vec![
            itinerary(1, 700, StopClass::TwoStop, "KLM", 22, 700),
            itinerary(2, 300, StopClass::NonStop, "Emirates", 4, 380),
            itinerary(3, 500, StopClass::OneStop, "Qatar Airways", 15, 520),
        ];

        let shown = apply(&all, &FilterState::default(), SortKey::Cheapest);

        assert_eq!(ids(&shown), vec![2, 3, 1]);
    }

    #[test]
    fn no_matches_is_an_empty_list() {
        let all = vec![itinerary(1, 500, StopClass::NonStop, "Emirates", 9, 400)];
        let filters = FilterState::new().with_arrival([TimeBand::Night]);

        assert!(apply(&all, &filters, SortKey::Fastest).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let all = vec![
            itinerary(3, 500, StopClass::NonStop, "Emirates", 9, 400),
            itinerary(1, 500, StopClass::NonStop, "KLM", 10, 420),
            itinerary(2, 500, StopClass::NonStop, "Emirates", 11, 380),
        ];

        let shown = apply(&all, &FilterState::default(), SortKey::Cheapest);

        assert_eq!(ids(&shown), vec![3, 1, 2]);
    }

    fn generated(seed: u64) -> Vec<Itinerary> {
        let mut rng = StdRng::seed_from_u64(seed);
        FlightGenerator::default().generate(&SearchRequest::one_way("LOS", "LON", "2026-01-10"), &mut rng)
    }

    fn filter_strategy() -> impl Strategy<Value = FilterState> {
        let stops = proptest::sample::subsequence(StopClass::ALL.to_vec(), 0..=3);
        let airlines = proptest::sample::subsequence(
            vec!["Emirates", "Qatar Airways", "British Airways", "KLM", "Air Peace"],
            0..=2,
        );
        let departure = proptest::sample::subsequence(TimeBand::ALL.to_vec(), 0..=2);
        let arrival = proptest::sample::subsequence(TimeBand::ALL.to_vec(), 0..=2);
        (stops, airlines, departure, arrival).prop_map(|(s, a, d, r)| {
            FilterState::new()
                .with_stops(s)
                .with_airlines(a)
                .with_departure(d)
                .with_arrival(r)
        })
    }

    fn sort_strategy() -> impl Strategy<Value = SortKey> {
        proptest::sample::select(SortKey::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn output_is_a_matching_subset(seed in any::<u64>(), filters in filter_strategy(), sort in sort_strategy()) {
            let all = generated(seed);
            let shown = apply(&all, &filters, sort);

            prop_assert!(shown.len() <= all.len());
            for it in &shown {
                prop_assert!(filters.matches(it));
                prop_assert!(all.contains(it));
            }
            let expected = all.iter().filter(|it| filters.matches(it)).count();
            prop_assert_eq!(shown.len(), expected);
        }

        #[test]
        fn output_is_ordered_by_the_sort_key(seed in any::<u64>(), sort in sort_strategy()) {
            let shown = apply(&generated(seed), &FilterState::default(), sort);
            prop_assert!(shown.windows(2).all(|w| sort.score(&w[0]) <= sort.score(&w[1])));
        }

        #[test]
        fn applying_twice_changes_nothing(seed in any::<u64>(), filters in filter_strategy(), sort in sort_strategy()) {
            let once = apply(&generated(seed), &filters, sort);
            let twice = apply(&once, &filters, sort);
            prop_assert_eq!(once, twice);
        }
    }
}
