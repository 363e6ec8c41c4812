//! Result ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, ParseLabelError};

/// How the results list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending price.
    #[default]
    Cheapest,
    /// Ascending outbound duration.
    Fastest,
    /// Ascending price + duration in minutes. A plain sum, not a weighted model.
    Recommended,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Cheapest, SortKey::Fastest, SortKey::Recommended];

    /// The value results are ordered by, smallest first.
    pub fn score(self, itinerary: &Itinerary) -> u64 {
        match self {
            SortKey::Cheapest => itinerary.price(),
            SortKey::Fastest => itinerary.duration_minutes(),
            SortKey::Recommended => itinerary
                .price()
                .saturating_add(itinerary.duration_minutes()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Cheapest => "cheapest",
            SortKey::Fastest => "fastest",
            SortKey::Recommended => "recommended",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheapest" | "price" => Ok(SortKey::Cheapest),
            "fastest" | "duration" => Ok(SortKey::Fastest),
            "recommended" | "best" => Ok(SortKey::Recommended),
            _ => Err(ParseLabelError::new("sort key", s)),
        }
    }
}

/// Sort itineraries in place by `key`.
///
/// The sort is stable: itineraries with equal scores keep their relative
/// order, which makes re-sorting an already sorted list a no-op.
pub fn sort_itineraries(itineraries: &mut [Itinerary], key: SortKey) {
    itineraries.sort_by_key(|it| key.score(it));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopClass;
    use crate::results::test_support::itinerary;

    fn ids(list: &[Itinerary]) -> Vec<u32> {
        list.iter().map(|it| it.id()).collect()
    }

    fn sample() -> Vec<Itinerary> {
        vec![
            itinerary(1, 900, StopClass::NonStop, "Emirates", 8, 380),
            itinerary(2, 500, StopClass::TwoStop, "KLM", 8, 665),
            itinerary(3, 700, StopClass::OneStop, "Lufthansa", 8, 520),
        ]
    }

    #[test]
    fn cheapest() {
        let mut list = sample();
        sort_itineraries(&mut list, SortKey::Cheapest);
        assert_eq!(ids(&list), vec![2, 3, 1]);
    }

    #[test]
    fn fastest() {
        let mut list = sample();
        sort_itineraries(&mut list, SortKey::Fastest);
        assert_eq!(ids(&list), vec![1, 3, 2]);
    }

    #[test]
    fn recommended_sums_price_and_minutes() {
        let mut list = sample();
        sort_itineraries(&mut list, SortKey::Recommended);
        // 1280, 1165, 1220
        assert_eq!(ids(&list), vec![2, 3, 1]);
        assert_eq!(SortKey::Recommended.score(&list[0]), 500 + 665);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut list = vec![
            itinerary(7, 500, StopClass::NonStop, "Emirates", 8, 400),
            itinerary(3, 500, StopClass::OneStop, "KLM", 9, 600),
            itinerary(5, 500, StopClass::TwoStop, "Lufthansa", 10, 665),
        ];
        sort_itineraries(&mut list, SortKey::Cheapest);
        assert_eq!(ids(&list), vec![7, 3, 5]);
    }

    #[test]
    fn parse_and_display() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("Price".parse::<SortKey>().unwrap(), SortKey::Cheapest);
        assert!("random".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default(), SortKey::Cheapest);
    }
}
