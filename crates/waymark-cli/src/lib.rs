//! Waymark CLI - headless demo tools for the trip planner core.
//!
//! - plan_trip: fetch and summarize a driving route through waypoints
//! - search_place: free-text place search against Nominatim

pub mod headless;

pub use headless::{parse_lat_lng, LoggingMapView};
