//! Presentation models for itineraries and price hints.
//!
//! These are flat, serialisable snapshots with pre-formatted strings, used
//! both for `--json` output and for the plain-text listing.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use crate::domain::{Itinerary, Journey, Layover, Segment, StopClass, TimeBand};
use crate::results::{Facet, PriceSummary};

/// `HH:MM`, 24-hour clock.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `7h 30m`, or `45m` when under an hour.
pub fn format_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Currency code followed by the amount with thousands separators, e.g.
/// `NGN 1,234,500`.
pub fn format_price(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{} {}", currency, grouped)
}

/// `+1` style marker for arrivals on a later day; `None` on the same day.
fn day_marker(offset: i64) -> Option<String> {
    (offset > 0).then(|| format!("+{}", offset))
}

/// One flight within a journey.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentView {
    pub flight: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_day: Option<String>,
    pub duration: String,
    pub aircraft: String,
}

impl SegmentView {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            flight: segment.flight_number().to_string(),
            from: segment.origin().to_string(),
            to: segment.destination().to_string(),
            departure: format_time(segment.departure()),
            arrival: format_time(segment.arrival()),
            arrival_day: day_marker(segment.arrival_day_offset()),
            duration: format_duration(segment.duration()),
            aircraft: segment.aircraft().to_string(),
        }
    }
}

/// A connection between two flights.
#[derive(Debug, Clone, Serialize)]
pub struct LayoverView {
    pub city: String,
    pub duration: String,
}

impl LayoverView {
    pub fn from_layover(layover: &Layover) -> Self {
        Self {
            city: layover.city.to_string(),
            duration: format_duration(layover.duration),
        }
    }
}

/// One direction of travel.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyView {
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_day: Option<String>,
    pub duration: String,
    pub stops: StopClass,
    pub segments: Vec<SegmentView>,
    pub layovers: Vec<LayoverView>,
}

impl JourneyView {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            from: journey.origin().to_string(),
            to: journey.destination().to_string(),
            departure: format_time(journey.departure()),
            arrival: format_time(journey.arrival()),
            arrival_day: day_marker(journey.arrival_day_offset()),
            duration: format_duration(journey.total_duration()),
            stops: journey.stop_class(),
            segments: journey.segments().iter().map(SegmentView::from_segment).collect(),
            layovers: journey.layovers().iter().map(LayoverView::from_layover).collect(),
        }
    }

    /// `LOS 08:15 → LHR 15:45 (7h 30m, Non-stop)`
    fn headline(&self) -> String {
        let mut line = format!(
            "{} {} → {} {}",
            self.from, self.departure, self.to, self.arrival
        );
        if let Some(day) = &self.arrival_day {
            line.push_str(day);
        }
        let _ = write!(line, " ({}, {})", self.duration, self.stops);
        line
    }

    fn via(&self) -> Option<String> {
        if self.layovers.is_empty() {
            return None;
        }
        let stops: Vec<String> = self
            .layovers
            .iter()
            .map(|l| format!("{} {}", l.city, l.duration))
            .collect();
        Some(format!("via {}", stops.join(", ")))
    }
}

/// A search result card.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryView {
    pub id: u32,
    pub airline: String,
    pub airline_code: String,
    pub logo: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub price: u64,
    pub currency: String,
    pub price_display: String,
    pub outbound: JourneyView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound: Option<JourneyView>,
}

impl ItineraryView {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let airline = itinerary.airline();
        Self {
            id: itinerary.id(),
            airline: airline.name.clone(),
            airline_code: airline.code.to_string(),
            logo: airline.logo.clone(),
            date: itinerary.date().to_string(),
            return_date: itinerary.return_date().map(str::to_string),
            price: itinerary.price(),
            currency: itinerary.currency().to_string(),
            price_display: format_price(itinerary.price(), itinerary.currency()),
            outbound: JourneyView::from_journey(itinerary.outbound()),
            inbound: itinerary.inbound().map(JourneyView::from_journey),
        }
    }

    /// A few lines of plain text describing the card.
    pub fn render_text(&self) -> String {
        let mut out = format!("#{:<3} {:<20} {}\n", self.id, self.airline, self.price_display);
        let mut direction = |label: &str, journey: &JourneyView| {
            let _ = writeln!(out, "     {:<4} {}", label, journey.headline());
            if let Some(via) = journey.via() {
                let _ = writeln!(out, "          {}", via);
            }
        };
        direction("out", &self.outbound);
        if let Some(inbound) = &self.inbound {
            direction("ret", inbound);
        }
        out
    }
}

/// A filter option with its cheapest price.
#[derive(Debug, Clone, Serialize)]
pub struct FacetView {
    pub label: String,
    pub count: usize,
    pub from_price: String,
}

impl FacetView {
    fn new(label: impl Into<String>, facet: &Facet, currency: &str) -> Self {
        Self {
            label: label.into(),
            count: facet.count,
            from_price: format_price(facet.min_price, currency),
        }
    }
}

/// Price hints for the filter sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest: Option<String>,
    pub stops: Vec<FacetView>,
    pub airlines: Vec<FacetView>,
    pub departure: Vec<FacetView>,
    pub arrival: Vec<FacetView>,
}

impl SummaryView {
    pub fn from_summary(summary: &PriceSummary, currency: &str) -> Self {
        let bands = |map: &BTreeMap<TimeBand, Facet>| -> Vec<FacetView> {
            TimeBand::ALL
                .iter()
                .filter_map(|band| map.get(band).map(|f| FacetView::new(band.label(), f, currency)))
                .collect()
        };

        Self {
            total: summary.total,
            cheapest: summary.cheapest.map(|p| format_price(p, currency)),
            fastest: summary
                .fastest_minutes
                .map(|m| format_duration(Duration::minutes(m as i64))),
            stops: StopClass::ALL
                .iter()
                .filter_map(|class| {
                    summary
                        .stops
                        .get(class)
                        .map(|f| FacetView::new(class.label(), f, currency))
                })
                .collect(),
            airlines: summary
                .airlines
                .iter()
                .map(|(name, f)| FacetView::new(name.as_str(), f, currency))
                .collect(),
            departure: bands(&summary.departure),
            arrival: bands(&summary.arrival),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::test_support::itinerary;

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(7, 5, 0).unwrap()), "07:05");
        assert_eq!(format_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap()), "23:59");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Duration::minutes(450)), "7h 30m");
        assert_eq!(format_duration(Duration::minutes(120)), "2h 0m");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(1_234_500, "NGN"), "NGN 1,234,500");
        assert_eq!(format_price(999, "NGN"), "NGN 999");
        assert_eq!(format_price(1000, "USD"), "USD 1,000");
        assert_eq!(format_price(0, "NGN"), "NGN 0");
    }

    #[test]
    fn itinerary_view_of_one_stop_flight() {
        // 20:00 departure, 600 minutes: legs of 200, 200 layover, 200
        let it = itinerary(7, 975_000, StopClass::OneStop, "Emirates", 20, 600);
        let view = ItineraryView::from_itinerary(&it);

        assert_eq!(view.id, 7);
        assert_eq!(view.price_display, "NGN 975,000");
        assert_eq!(view.outbound.departure, "20:00");
        assert_eq!(view.outbound.arrival, "06:00");
        assert_eq!(view.outbound.arrival_day.as_deref(), Some("+1"));
        assert_eq!(view.outbound.duration, "10h 0m");
        assert_eq!(view.outbound.segments.len(), 2);
        assert_eq!(view.outbound.layovers[0].city, "DXB");
        assert_eq!(view.outbound.layovers[0].duration, "3h 20m");
        assert!(view.inbound.is_none());
    }

    #[test]
    fn text_rendering_mentions_layovers() {
        let it = itinerary(1, 500_000, StopClass::OneStop, "KLM", 9, 300);
        let text = ItineraryView::from_itinerary(&it).render_text();

        assert!(text.starts_with("#1"));
        assert!(text.contains("KLM"));
        assert!(text.contains("NGN 500,000"));
        assert!(text.contains("LOS 09:00 → LON 14:00 (5h 0m, 1 Stop)"));
        assert!(text.contains("via DXB 1h 40m"));
    }

    #[test]
    fn json_omits_missing_inbound() {
        let it = itinerary(1, 500, StopClass::NonStop, "KLM", 9, 300);
        let json = serde_json::to_value(ItineraryView::from_itinerary(&it)).unwrap();

        assert!(json.get("inbound").is_none());
        assert_eq!(json["outbound"]["stops"], "Non-stop");
    }

    #[test]
    fn summary_view_lists_present_facets_in_display_order() {
        let all = vec![
            itinerary(1, 900, StopClass::NonStop, "Emirates", 8, 380),
            itinerary(2, 500, StopClass::TwoStop, "KLM", 19, 665),
        ];
        let view = SummaryView::from_summary(&PriceSummary::from_itineraries(&all), "NGN");

        assert_eq!(view.total, 2);
        assert_eq!(view.cheapest.as_deref(), Some("NGN 500"));
        assert_eq!(view.fastest.as_deref(), Some("6h 20m"));
        let labels: Vec<_> = view.stops.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Non-stop", "2 Stops"]);
        let departure: Vec<_> = view.departure.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(departure, vec!["Morning", "Evening"]);
    }
}
