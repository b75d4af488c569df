//! Fetch a driving route through the given waypoints and print a summary.
//!
//! Example:
//!     plan_trip 55.7558,37.6176 55.7887,37.6111

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waymark_cli::{parse_lat_lng, LoggingMapView};
use waymark_clients::{OsrmClient, DEFAULT_OSRM_URL};
use waymark_core::{haversine_distance, LatLng, RouteSync};

#[derive(Parser)]
#[command(about = "Fetch a driving route through the given waypoints")]
struct Args {
    /// Waypoints as "lat,lng" pairs, in traversal order
    #[arg(required = true, num_args = 2..)]
    waypoints: Vec<String>,

    /// OSRM base URL
    #[arg(long, default_value = DEFAULT_OSRM_URL)]
    osrm_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let positions: Vec<LatLng> = args
        .waypoints
        .iter()
        .map(|raw| parse_lat_lng(raw))
        .collect::<Result<_>>()?;

    let view = LoggingMapView::default();
    let mut sync = RouteSync::with_view(view.clone(), OsrmClient::new(args.osrm_url));
    for position in &positions {
        sync.add_marker(*position, None).await;
    }

    let Some(route) = view.last_route() else {
        anyhow::bail!("no route could be fetched (see log output)");
    };

    let first = positions[0];
    let last = positions[positions.len() - 1];
    println!("Route through {} waypoints", positions.len());
    println!("  distance:      {:.1} km", route.distance_m / 1000.0);
    println!("  duration:      {:.1} min", route.duration_s / 60.0);
    println!(
        "  straight line: {:.1} km",
        haversine_distance(first.lat, first.lng, last.lat, last.lng) / 1000.0
    );
    println!("  path points:   {}", route.geometry.len());

    Ok(())
}
