//! Application configuration from environment.

use std::env;
use waymark_core::LatLng;

const DEFAULT_DEBOUNCE_MS: u64 = 300;
const INITIAL_LAT: f64 = 55.7558;
const INITIAL_LNG: f64 = 37.6176;
const INITIAL_ZOOM: u8 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub osrm_url: String,
    pub nominatim_url: String,
    /// Quiescence window for the search debounce gate, in milliseconds.
    pub debounce_ms: u64,
    pub initial_center: LatLng,
    pub initial_zoom: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            osrm_url: waymark_clients::DEFAULT_OSRM_URL.to_string(),
            nominatim_url: waymark_clients::DEFAULT_NOMINATIM_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            initial_center: LatLng::new(INITIAL_LAT, INITIAL_LNG),
            initial_zoom: INITIAL_ZOOM,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            osrm_url: env::var("WAYMARK_OSRM_URL").unwrap_or(defaults.osrm_url),
            nominatim_url: env::var("WAYMARK_NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            debounce_ms: env::var("WAYMARK_DEBOUNCE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.debounce_ms),
            initial_center: defaults.initial_center,
            initial_zoom: defaults.initial_zoom,
        }
    }
}
