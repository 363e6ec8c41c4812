//! Fixed catalog of carriers, aircraft and connecting hubs.

use crate::domain::{Airline, AirlineCode, AirportCode};

/// (designator, name, logo asset)
const AIRLINES: &[(&str, &str, &str)] = &[
    ("EK", "Emirates", "/images/airlines/emirates.png"),
    ("QR", "Qatar Airways", "/images/airlines/qatar-airways.png"),
    ("BA", "British Airways", "/images/airlines/british-airways.png"),
    ("TK", "Turkish Airlines", "/images/airlines/turkish-airlines.png"),
    ("ET", "Ethiopian Airlines", "/images/airlines/ethiopian-airlines.png"),
    ("P4", "Air Peace", "/images/airlines/air-peace.png"),
    ("KQ", "Kenya Airways", "/images/airlines/kenya-airways.png"),
    ("VS", "Virgin Atlantic", "/images/airlines/virgin-atlantic.png"),
    ("LH", "Lufthansa", "/images/airlines/lufthansa.png"),
    ("AF", "Air France", "/images/airlines/air-france.png"),
    ("KL", "KLM", "/images/airlines/klm.png"),
    ("MS", "EgyptAir", "/images/airlines/egyptair.png"),
];

const AIRCRAFT: &[&str] = &[
    "Boeing 777-300ER",
    "Boeing 787-9",
    "Boeing 737-800",
    "Airbus A350-900",
    "Airbus A330-300",
    "Airbus A320neo",
    "Airbus A380-800",
];

const ONE_STOP_HUBS: &[&str] = &["DXB", "DOH", "IST", "ADD", "CDG"];

const TWO_STOP_HUBS: [&str; 2] = ["ACC", "CDG"];

pub(crate) const DEFAULT_ORIGIN: &str = "LOS";
pub(crate) const DEFAULT_DESTINATION: &str = "LON";

/// Lowest and highest flight number handed out.
pub(crate) const FLIGHT_NUMBERS: (u16, u16) = (100, 9999);

/// The airlines results are drawn from.
pub fn default_airlines() -> Vec<Airline> {
    AIRLINES
        .iter()
        .filter_map(|(code, name, logo)| {
            AirlineCode::parse(code)
                .ok()
                .map(|code| Airline::new(code, *name, *logo))
        })
        .collect()
}

/// Aircraft type labels attached to generated segments.
pub fn default_aircraft() -> Vec<String> {
    AIRCRAFT.iter().map(|a| (*a).to_string()).collect()
}

/// Candidate connecting airports for one-stop journeys.
pub fn default_one_stop_hubs() -> Vec<AirportCode> {
    ONE_STOP_HUBS.iter().map(|h| AirportCode::or_default(h, h)).collect()
}

/// The two connecting airports every two-stop journey passes through.
pub fn default_two_stop_hubs() -> [AirportCode; 2] {
    TWO_STOP_HUBS.map(|h| AirportCode::or_default(h, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_airline_parses() {
        assert_eq!(default_airlines().len(), AIRLINES.len());
    }

    #[test]
    fn airline_names_are_unique() {
        let airlines = default_airlines();
        let mut names: Vec<_> = airlines.iter().map(|a| a.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), airlines.len());
    }

    #[test]
    fn hubs() {
        let hubs = default_one_stop_hubs();
        assert_eq!(hubs.len(), 5);
        assert!(hubs.contains(&AirportCode::new("DXB").unwrap()));

        let [first, second] = default_two_stop_hubs();
        assert_eq!(first.as_str(), "ACC");
        assert_eq!(second.as_str(), "CDG");
    }

    #[test]
    fn aircraft_nonempty() {
        assert!(!default_aircraft().is_empty());
    }
}
