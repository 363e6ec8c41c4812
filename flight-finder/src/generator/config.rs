//! Generator configuration.
//!
//! All the knobs of the mock results model live here. The defaults reproduce
//! the search results page: fifteen options, mostly non-stop, priced in naira.
//! A JSON file can override any subset of fields.

use std::path::{Path, PathBuf};

use chrono::Duration;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog;
use crate::domain::{Airline, AirportCode, StopClass};

/// Error loading or validating a [`GeneratorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the config file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for this config
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The values cannot drive the generator
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Longest flight or connection the generator accepts, in minutes.
pub const MAX_LEG_MINUTES: i64 = 24 * 60;

/// An inclusive range of minutes, sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteRange {
    pub min: i64,
    pub max: i64,
}

impl MinuteRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::minutes(rng.gen_range(self.min..=self.max))
    }

    pub fn contains(&self, duration: Duration) -> bool {
        (self.min..=self.max).contains(&duration.num_minutes())
    }
}

/// An inclusive band of base prices (before the currency multiplier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: u32,
    pub max: u32,
}

impl PriceBand {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Configuration parameters for itinerary generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Itineraries produced per search.
    pub itinerary_count: usize,

    /// Probability that an itinerary is non-stop. The remainder is split
    /// evenly between one and two stops.
    pub non_stop_probability: f64,

    /// Used when the search form leaves the origin blank.
    pub default_origin: AirportCode,

    /// Used when the search form leaves the destination blank.
    pub default_destination: AirportCode,

    /// Flight time of a non-stop journey.
    pub non_stop_minutes: MinuteRange,

    /// One-stop: first flight, connection, second flight.
    pub one_stop_first_leg_minutes: MinuteRange,
    pub one_stop_layover_minutes: MinuteRange,
    pub one_stop_second_leg_minutes: MinuteRange,

    /// Connecting airports for one-stop journeys (one is drawn per journey).
    pub one_stop_hubs: Vec<AirportCode>,

    /// Two-stop journeys are fixed: these hubs, in this order outbound.
    pub two_stop_hubs: [AirportCode; 2],
    pub two_stop_leg_minutes: [i64; 3],
    pub two_stop_layover_minutes: [i64; 2],

    /// Base price band for journeys with at least one stop.
    pub connecting_price: PriceBand,

    /// Base price band for non-stop journeys. Starts above the connecting
    /// band but overlaps it, so a direct flight is usually, not always, dearer.
    pub non_stop_price: PriceBand,

    /// ISO 4217 code prices are quoted in.
    pub currency: String,

    /// Converts a base price into `currency`.
    pub currency_multiplier: f64,

    /// Applied to the whole price when a return journey is included.
    pub round_trip_multiplier: f64,

    /// Carriers to draw from.
    pub airlines: Vec<Airline>,

    /// Aircraft labels to draw from.
    pub aircraft: Vec<String>,
}

impl GeneratorConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that generation can proceed with these values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.itinerary_count == 0 {
            return invalid("itinerary_count must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.non_stop_probability) {
            return invalid(format!(
                "non_stop_probability must be within [0, 1], got {}",
                self.non_stop_probability
            ));
        }

        for (name, range) in [
            ("non_stop_minutes", self.non_stop_minutes),
            ("one_stop_first_leg_minutes", self.one_stop_first_leg_minutes),
            ("one_stop_layover_minutes", self.one_stop_layover_minutes),
            ("one_stop_second_leg_minutes", self.one_stop_second_leg_minutes),
        ] {
            if range.min <= 0 || range.min > range.max || range.max > MAX_LEG_MINUTES {
                return invalid(format!(
                    "{name} must satisfy 0 < min <= max <= {MAX_LEG_MINUTES}, got {}..={}",
                    range.min, range.max
                ));
            }
        }
        if self
            .two_stop_leg_minutes
            .iter()
            .chain(&self.two_stop_layover_minutes)
            .any(|&m| m <= 0 || m > MAX_LEG_MINUTES)
        {
            return invalid(format!(
                "two-stop durations must be within 1..={MAX_LEG_MINUTES} minutes"
            ));
        }

        for (name, band) in [
            ("connecting_price", self.connecting_price),
            ("non_stop_price", self.non_stop_price),
        ] {
            if band.min == 0 || band.min > band.max {
                return invalid(format!(
                    "{name} must satisfy 0 < min <= max, got {}..={}",
                    band.min, band.max
                ));
            }
        }
        for (name, factor) in [
            ("currency_multiplier", self.currency_multiplier),
            ("round_trip_multiplier", self.round_trip_multiplier),
        ] {
            if !factor.is_finite() || factor <= 0.0 {
                return invalid(format!("{name} must be positive, got {factor}"));
            }
        }

        if self.one_stop_hubs.is_empty() {
            return invalid("one_stop_hubs must not be empty".into());
        }
        if self.airlines.is_empty() {
            return invalid("airlines must not be empty".into());
        }
        if self.aircraft.is_empty() {
            return invalid("aircraft must not be empty".into());
        }
        if self.currency.trim().is_empty() {
            return invalid("currency must not be blank".into());
        }

        Ok(())
    }

    /// Base price band for a stop class.
    pub fn price_band(&self, class: StopClass) -> PriceBand {
        match class {
            StopClass::NonStop => self.non_stop_price,
            StopClass::OneStop | StopClass::TwoStop => self.connecting_price,
        }
    }

    /// Two-stop flight times as Durations.
    pub fn two_stop_legs(&self) -> [Duration; 3] {
        self.two_stop_leg_minutes.map(Duration::minutes)
    }

    /// Two-stop connection times as Durations.
    pub fn two_stop_layovers(&self) -> [Duration; 2] {
        self.two_stop_layover_minutes.map(Duration::minutes)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            itinerary_count: 15,
            non_stop_probability: 0.6,
            default_origin: AirportCode::or_default(catalog::DEFAULT_ORIGIN, "LOS"),
            default_destination: AirportCode::or_default(catalog::DEFAULT_DESTINATION, "LON"),
            non_stop_minutes: MinuteRange::new(6 * 60, 8 * 60),
            one_stop_first_leg_minutes: MinuteRange::new(3 * 60, 4 * 60),
            one_stop_layover_minutes: MinuteRange::new(90, 210), // 1h30 - 3h30
            one_stop_second_leg_minutes: MinuteRange::new(3 * 60, 4 * 60),
            one_stop_hubs: catalog::default_one_stop_hubs(),
            two_stop_hubs: catalog::default_two_stop_hubs(),
            two_stop_leg_minutes: [120, 180, 140], // 2h, 3h, 2h20
            two_stop_layover_minutes: [90, 135],   // 1h30, 2h15
            connecting_price: PriceBand::new(250, 650),
            non_stop_price: PriceBand::new(400, 900),
            currency: "NGN".to_string(),
            currency_multiplier: 1500.0,
            round_trip_multiplier: 1.8,
            airlines: catalog::default_airlines(),
            aircraft: catalog::default_aircraft(),
        }
    }
}
