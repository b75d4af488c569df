//! Core data models for the trip planner.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// The internal convention is latitude-first everywhere; the GeoJSON
/// boundary in [`crate::geojson`] is the only place the axis order flips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Session-unique marker handle.
///
/// Ids are assigned monotonically and never reused, even after removal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MarkerId(pub u64);

/// A user-placed waypoint marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub position: LatLng,
    /// Optional display name shown in the marker popup.
    #[serde(default)]
    pub label: Option<String>,
}

impl Marker {
    pub fn new(id: MarkerId, position: LatLng) -> Self {
        Self {
            id,
            position,
            label: None,
        }
    }

    pub fn with_label(id: MarkerId, position: LatLng, label: impl Into<String>) -> Self {
        Self {
            id,
            position,
            label: Some(label.into()),
        }
    }
}

/// Handle for a route overlay placed on the map view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OverlayId(pub u64);

/// A renderable driving route returned by the routing client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Request waypoints, echoed back in traversal order.
    pub waypoints: Vec<LatLng>,
    /// Full path geometry as returned by the routing service.
    pub geometry: Vec<LatLng>,
    pub distance_m: f64,
    pub duration_s: f64,
}

/// A geocoding candidate produced by the place-search client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub position: LatLng,
}
