//! Search results lifecycle.

use tracing::{debug, info};

use super::apply;
use super::filter::FilterState;
use super::sort::SortKey;
use super::summary::PriceSummary;
use crate::domain::{Itinerary, StopClass, TimeBand};
use crate::generator::{ItinerarySource, SearchRequest};

/// The state behind one results page.
///
/// Each new search replaces the itineraries and resets the filters and sort
/// order. Filter toggles only change what [`displayed`](Self::displayed)
/// returns; the full result set and its [`PriceSummary`] stay as searched.
pub struct ResultsSession<S> {
    source: S,
    request: Option<SearchRequest>,
    itineraries: Vec<Itinerary>,
    summary: PriceSummary,
    filters: FilterState,
    sort: SortKey,
}

impl<S: ItinerarySource> ResultsSession<S> {
    /// Creates an empty session that searches through `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            request: None,
            itineraries: Vec::new(),
            summary: PriceSummary::default(),
            filters: FilterState::default(),
            sort: SortKey::default(),
        }
    }

    /// Run a new search, discarding previous results and selections.
    ///
    /// Returns the number of itineraries found.
    pub fn search(&mut self, request: SearchRequest) -> usize {
        self.itineraries = self.source.search(&request);
        self.summary = PriceSummary::from_itineraries(&self.itineraries);
        self.filters.clear();
        self.sort = SortKey::default();

        info!(
            origin = %request.origin,
            destination = %request.destination,
            trip = %request.trip_type,
            results = self.itineraries.len(),
            "search complete"
        );

        self.request = Some(request);
        self.itineraries.len()
    }

    /// The request behind the current results, if a search has run.
    pub fn request(&self) -> Option<&SearchRequest> {
        self.request.as_ref()
    }

    /// Every itinerary from the last search, unfiltered, cheapest first.
    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// Price hints over the unfiltered results.
    pub fn summary(&self) -> &PriceSummary {
        &self.summary
    }

    /// Returns the current filter selections.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replace all filter selections at once.
    pub fn set_filters(&mut self, filters: FilterState) {
        debug!(?filters, "filters replaced");
        self.filters = filters;
    }

    /// Returns the current sort order.
    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    /// Changes the sort order of the displayed list.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Flips a stop class filter. Returns whether it is now selected.
    pub fn toggle_stop(&mut self, class: StopClass) -> bool {
        self.filters.toggle_stop(class)
    }

    /// Flips an airline filter. Returns whether it is now selected.
    pub fn toggle_airline(&mut self, name: &str) -> bool {
        self.filters.toggle_airline(name)
    }

    /// Flips a departure band filter. Returns whether it is now selected.
    pub fn toggle_departure(&mut self, band: TimeBand) -> bool {
        self.filters.toggle_departure(band)
    }

    /// Flips an arrival band filter. Returns whether it is now selected.
    pub fn toggle_arrival(&mut self, band: TimeBand) -> bool {
        self.filters.toggle_arrival(band)
    }

    /// Drops every filter selection.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// The filtered, ordered list to show.
    pub fn displayed(&self) -> Vec<Itinerary> {
        apply(&self.itineraries, &self.filters, self.sort)
    }
}
