use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flight_finder::domain::{StopClass, TimeBand, TripType};
use flight_finder::generator::{FlightGenerator, GeneratorConfig, MockItinerarySource, SearchRequest};
use flight_finder::results::{FilterState, ResultsSession, SortKey};
use flight_finder::view::{ItineraryView, SummaryView};

/// Search mock flight itineraries and narrow them down.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Origin airport code (blank uses the configured default)
    #[arg(long, default_value = "")]
    from: String,

    /// Destination airport code (blank uses the configured default)
    #[arg(long, default_value = "")]
    to: String,

    /// Departure date, shown as given
    #[arg(long, default_value = "")]
    date: String,

    /// oneWay or roundTrip
    #[arg(long, default_value = "oneWay")]
    trip: TripType,

    /// Return date for round trips
    #[arg(long)]
    return_date: Option<String>,

    /// Seed for reproducible results
    #[arg(long, env = "FLIGHT_FINDER_SEED")]
    seed: Option<u64>,

    /// Generator settings as JSON
    #[arg(long, env = "FLIGHT_FINDER_CONFIG")]
    config: Option<PathBuf>,

    /// Keep only this stop class (repeatable): "Non-stop", "1 Stop", "2 Stops"
    #[arg(long)]
    stops: Vec<StopClass>,

    /// Keep only this airline, by display name (repeatable)
    #[arg(long)]
    airline: Vec<String>,

    /// Keep only departures in this band (repeatable)
    #[arg(long)]
    depart: Vec<TimeBand>,

    /// Keep only arrivals in this band (repeatable)
    #[arg(long)]
    arrive: Vec<TimeBand>,

    /// cheapest, fastest or recommended
    #[arg(long, default_value = "cheapest")]
    sort: SortKey,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output {
    request: SearchRequest,
    sort: SortKey,
    filters: FilterState,
    summary: SummaryView,
    itineraries: Vec<ItineraryView>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "flight_finder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading generator config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let currency = config.currency.clone();
    let generator = FlightGenerator::new(config)?;
    let source = match cli.seed {
        Some(seed) => MockItinerarySource::seeded(generator, seed),
        None => MockItinerarySource::from_entropy(generator),
    };

    let request = SearchRequest {
        origin: cli.from,
        destination: cli.to,
        date: cli.date,
        trip_type: cli.trip,
        return_date: cli.return_date,
    };

    let mut session = ResultsSession::new(source);
    session.search(request.clone());
    session.set_filters(
        FilterState::new()
            .with_stops(cli.stops)
            .with_airlines(cli.airline)
            .with_departure(cli.depart)
            .with_arrival(cli.arrive),
    );
    session.set_sort(cli.sort);

    let shown: Vec<ItineraryView> = session
        .displayed()
        .iter()
        .map(ItineraryView::from_itinerary)
        .collect();
    let summary = SummaryView::from_summary(session.summary(), &currency);

    if cli.json {
        let output = Output {
            request,
            sort: session.sort_key(),
            filters: session.filters().clone(),
            summary,
            itineraries: shown,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(&summary);
    println!();
    if shown.is_empty() {
        println!("No flights match the selected filters.");
        return Ok(());
    }
    println!(
        "Showing {} of {} flights, sorted by {}",
        shown.len(),
        summary.total,
        session.sort_key()
    );
    for card in &shown {
        print!("\n{}", card.render_text());
    }

    Ok(())
}

fn print_summary(summary: &SummaryView) {
    if let Some(cheapest) = &summary.cheapest {
        println!("Cheapest: {}", cheapest);
    }
    if let Some(fastest) = &summary.fastest {
        println!("Fastest:  {}", fastest);
    }
    for (heading, facets) in [
        ("Stops", &summary.stops),
        ("Airlines", &summary.airlines),
        ("Departure", &summary.departure),
        ("Arrival", &summary.arrival),
    ] {
        println!("{}:", heading);
        for facet in facets {
            println!("  {:<20} {:>3}  from {}", facet.label, facet.count, facet.from_price);
        }
    }
}
