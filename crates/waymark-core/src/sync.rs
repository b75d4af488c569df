//! Marker–route synchronizer.
//!
//! [`RouteSync`] owns the ordered waypoint marker sequence and the derived
//! route overlay handles. The map view and the routing service are reached
//! through the [`MapView`] and [`RoutingClient`] ports; collaborators emit
//! events and receive commands but never touch the owned state directly.
//!
//! The route overlay is never patched incrementally: every mutation tears
//! down all overlays and rebuilds them from the current marker order, so a
//! caller can never observe a stale segment.

use crate::draw::{DrawLayer, Shape};
use crate::error::{GeocodeError, RoutingError};
use crate::geojson::FeatureCollection;
use crate::models::{LatLng, Marker, MarkerId, OverlayId, RoutePath, SearchResult};
use std::future::Future;

/// Command surface of the map view.
///
/// Implementations render; they must not mutate planner state.
pub trait MapView {
    /// Place a draggable marker handle at `position`.
    fn place_marker(&mut self, id: MarkerId, position: LatLng);
    fn remove_marker(&mut self, id: MarkerId);
    fn pan_to(&mut self, position: LatLng);
    fn set_view(&mut self, center: LatLng, zoom: u8);
    /// Recompute the view's pixel size after a container resize. Safe to
    /// invoke redundantly.
    fn invalidate_size(&mut self);
    fn draw_route(&mut self, id: OverlayId, path: &RoutePath);
    fn clear_route(&mut self, id: OverlayId);
}

/// Port to the external routing service.
pub trait RoutingClient: Send + Sync {
    /// Fetch a driving route through `waypoints` in the given order.
    fn route(
        &self,
        waypoints: &[LatLng],
    ) -> impl Future<Output = Result<RoutePath, RoutingError>> + Send;
}

/// Port to the external place-search service.
pub trait GeocodingClient: Send + Sync {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchResult>, GeocodeError>> + Send;
}

/// Marker–route synchronizer.
///
/// Mutations are serialized by `&mut self`; with a single owner there is no
/// window for a stale route response to land after a newer mutation.
pub struct RouteSync<V: MapView, R: RoutingClient> {
    view: Option<V>,
    router: R,
    markers: Vec<Marker>,
    next_marker_id: u64,
    overlays: Vec<OverlayId>,
    next_overlay_id: u64,
    draw: DrawLayer,
}

impl<V: MapView, R: RoutingClient> RouteSync<V, R> {
    /// Create a synchronizer with no map surface attached. All mutating
    /// operations no-op until a view is attached.
    pub fn new(router: R) -> Self {
        Self {
            view: None,
            router,
            markers: Vec::new(),
            next_marker_id: 0,
            overlays: Vec::new(),
            next_overlay_id: 0,
            draw: DrawLayer::new(),
        }
    }

    pub fn with_view(view: V, router: R) -> Self {
        let mut sync = Self::new(router);
        sync.view = Some(view);
        sync
    }

    pub fn is_attached(&self) -> bool {
        self.view.is_some()
    }

    /// Waypoint markers in insertion order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Handles of the overlays currently attached to the view.
    pub fn overlays(&self) -> &[OverlayId] {
        &self.overlays
    }

    /// Attach a (re)built map surface and replay any held markers through
    /// the regular placement path, so a remounted session is observably
    /// identical to one built incrementally.
    pub async fn attach_view(&mut self, view: V) {
        self.view = Some(view);
        let held = std::mem::take(&mut self.markers);
        self.restore(held).await;
    }

    /// Detach the map surface, e.g. when its container is unmounted.
    /// Markers are kept for the next [`Self::attach_view`]; overlay handles
    /// die with the view.
    pub fn detach_view(&mut self) -> Option<V> {
        self.overlays.clear();
        self.view.take()
    }

    /// Add a waypoint marker at `position` and rebuild the route overlay.
    ///
    /// Returns `None` only when no map surface is attached, in which case
    /// nothing is mutated.
    pub async fn add_marker(
        &mut self,
        position: LatLng,
        label: Option<String>,
    ) -> Option<MarkerId> {
        if self.view.is_none() {
            tracing::debug!("add_marker ignored: no map view attached");
            return None;
        }
        let id = MarkerId(self.next_marker_id);
        self.place(Marker {
            id,
            position,
            label,
        })
        .await;
        Some(id)
    }

    /// Move an existing marker. Unknown ids are ignored.
    pub async fn move_marker(&mut self, id: MarkerId, new_position: LatLng) {
        let Some(index) = self.markers.iter().position(|m| m.id == id) else {
            tracing::debug!(marker_id = id.0, "move_marker ignored: unknown id");
            return;
        };
        let Some(view) = self.view.as_mut() else {
            return;
        };
        self.markers[index].position = new_position;
        view.pan_to(new_position);
        view.invalidate_size();
        self.recompute_route().await;
    }

    /// Remove a marker and rebuild the route overlay. Unknown ids are
    /// ignored; removed ids are never reassigned.
    pub async fn remove_marker(&mut self, id: MarkerId) {
        let Some(index) = self.markers.iter().position(|m| m.id == id) else {
            tracing::debug!(marker_id = id.0, "remove_marker ignored: unknown id");
            return;
        };
        let Some(view) = self.view.as_mut() else {
            return;
        };
        self.markers.remove(index);
        view.remove_marker(id);
        self.recompute_route().await;
    }

    /// Rebuild the route overlay from the current marker order.
    ///
    /// All overlays are removed from the view before their handles are
    /// dropped; a reversed order would leak visual handles. With fewer than
    /// two markers the overlay set is left empty. Idempotent: a second call
    /// with no intervening mutation produces the same overlays and no
    /// stale accumulation. A routing failure is logged and leaves the
    /// marker sequence intact with no overlay.
    pub async fn recompute_route(&mut self) {
        {
            let Some(view) = self.view.as_mut() else {
                return;
            };
            for overlay in std::mem::take(&mut self.overlays) {
                view.clear_route(overlay);
            }
        }

        if self.markers.len() < 2 {
            return;
        }

        let waypoints: Vec<LatLng> = self.markers.iter().map(|m| m.position).collect();
        match self.router.route(&waypoints).await {
            Ok(path) => {
                let Some(view) = self.view.as_mut() else {
                    return;
                };
                let id = OverlayId(self.next_overlay_id);
                self.next_overlay_id += 1;
                view.draw_route(id, &path);
                self.overlays.push(id);
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    waypoints = waypoints.len(),
                    "route request failed; leaving overlay empty"
                );
            }
        }
    }

    /// Rebuild state from a previously held marker sequence.
    ///
    /// Each entry goes through the same placement path as a live
    /// `add_marker`, so handle placement, id bookkeeping, and route
    /// recomputation all behave exactly as they did when the markers were
    /// first created.
    pub async fn restore(&mut self, markers: Vec<Marker>) {
        for marker in markers {
            self.place(marker).await;
        }
    }

    /// Shared placement path for live adds and restore replay.
    async fn place(&mut self, marker: Marker) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        // Duplicate ids are ignored, never overwritten.
        if self.markers.iter().any(|m| m.id == marker.id) {
            tracing::debug!(marker_id = marker.id.0, "duplicate marker id ignored");
            return;
        }
        self.next_marker_id = self.next_marker_id.max(marker.id.0 + 1);
        view.place_marker(marker.id, marker.position);
        self.markers.push(marker);
        self.recompute_route().await;
    }

    /// Center the view. No-op while detached.
    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        if let Some(view) = self.view.as_mut() {
            view.set_view(center, zoom);
        }
    }

    /// Forward a container resize to the view. Idempotent.
    pub fn invalidate_size(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.invalidate_size();
        }
    }

    /// Accept a shape created by the draw toolkit.
    pub fn add_shape(&mut self, shape: Shape) {
        self.draw.add(shape);
    }

    pub fn draw_layer(&self) -> &DrawLayer {
        &self.draw
    }

    /// Export the draw layer's shapes (not markers or routes) as GeoJSON.
    pub fn save_snapshot(&self) -> FeatureCollection {
        self.draw.to_geojson()
    }
}
