//! Mock flight search.
//!
//! Generates plausible itineraries for a search form and narrows them down
//! with the filter and sort controls of a results page.

pub mod domain;
pub mod generator;
pub mod results;
pub mod view;
