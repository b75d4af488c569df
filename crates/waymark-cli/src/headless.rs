//! Headless map view and argument parsing helpers for the demo bins.

use anyhow::{Context, Result};
use std::sync::{Arc, Mutex};
use waymark_core::{LatLng, MapView, MarkerId, OverlayId, RoutePath};

/// Map view that logs every command instead of rendering, and keeps the
/// last drawn route so the bins can print a summary.
#[derive(Clone, Default)]
pub struct LoggingMapView {
    last_route: Arc<Mutex<Option<RoutePath>>>,
}

impl LoggingMapView {
    pub fn last_route(&self) -> Option<RoutePath> {
        self.last_route.lock().ok().and_then(|route| route.clone())
    }
}

impl MapView for LoggingMapView {
    fn place_marker(&mut self, id: MarkerId, position: LatLng) {
        tracing::info!(marker = id.0, lat = position.lat, lng = position.lng, "place marker");
    }

    fn remove_marker(&mut self, id: MarkerId) {
        tracing::info!(marker = id.0, "remove marker");
    }

    fn pan_to(&mut self, position: LatLng) {
        tracing::debug!(lat = position.lat, lng = position.lng, "pan");
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        tracing::debug!(lat = center.lat, lng = center.lng, zoom, "set view");
    }

    fn invalidate_size(&mut self) {}

    fn draw_route(&mut self, id: OverlayId, path: &RoutePath) {
        tracing::info!(
            overlay = id.0,
            distance_m = path.distance_m,
            duration_s = path.duration_s,
            "draw route"
        );
        if let Ok(mut route) = self.last_route.lock() {
            *route = Some(path.clone());
        }
    }

    fn clear_route(&mut self, id: OverlayId) {
        tracing::debug!(overlay = id.0, "clear route");
    }
}

/// Parse a `"lat,lng"` pair.
pub fn parse_lat_lng(raw: &str) -> Result<LatLng> {
    let (lat, lng) = raw
        .split_once(',')
        .with_context(|| format!("expected \"lat,lng\", got {raw:?}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude in {raw:?}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude in {raw:?}"))?;
    Ok(LatLng::new(lat, lng))
}
