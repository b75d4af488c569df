//! Free-text place search against Nominatim.
//!
//! Example:
//!     search_place "red square moscow"

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waymark_clients::{NominatimClient, DEFAULT_NOMINATIM_URL};
use waymark_core::GeocodingClient;

#[derive(Parser)]
#[command(about = "Search for a place by free-text query")]
struct Args {
    /// The search query
    query: String,

    /// Nominatim base URL
    #[arg(long, default_value = DEFAULT_NOMINATIM_URL)]
    nominatim_url: String,

    /// Maximum number of candidates to print
    #[arg(long, default_value_t = 5)]
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = NominatimClient::new(args.nominatim_url);
    let results = client.search(&args.query).await?;

    if results.is_empty() {
        println!("No places found for {:?}", args.query);
        return Ok(());
    }

    for result in results.iter().take(args.limit) {
        println!(
            "{:>10.5}, {:>10.5}  {}",
            result.position.lat, result.position.lng, result.name
        );
    }

    Ok(())
}
