//! Planner session: UI events in, synchronizer and view commands out.
//!
//! The synchronizer is held behind a single tokio `Mutex`, so every
//! mutation serializes exactly like handlers on a browser event loop; two
//! drag events can never interleave their read-modify-write on the marker
//! sequence.

use crate::config::Config;
use crate::prefs::{KeyValueStore, Theme, ThemeStore};
use crate::search::SearchSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use waymark_core::{
    FeatureCollection, GeocodingClient, LatLng, MapView, Marker, MarkerId, RouteSync,
    RoutingClient, SearchResult, Shape,
};

/// Label given to markers dropped through the add-marker action.
pub const DEFAULT_MARKER_LABEL: &str = "New marker";

pub struct PlannerSession<V, R, G, S>
where
    V: MapView + Send,
    R: RoutingClient,
    G: GeocodingClient + 'static,
    S: KeyValueStore,
{
    sync: Arc<Mutex<RouteSync<V, R>>>,
    search: SearchSession<G>,
    theme: ThemeStore<S>,
    config: Config,
}

impl<V, R, G, S> PlannerSession<V, R, G, S>
where
    V: MapView + Send,
    R: RoutingClient,
    G: GeocodingClient + 'static,
    S: KeyValueStore,
{
    pub fn new(view: V, router: R, geocoder: G, store: S, config: Config) -> Self {
        let search = SearchSession::new(geocoder, Duration::from_millis(config.debounce_ms));
        Self {
            sync: Arc::new(Mutex::new(RouteSync::with_view(view, router))),
            search,
            theme: ThemeStore::init(store),
            config,
        }
    }

    /// Center the map on the configured initial viewport.
    pub async fn show_initial_view(&self) {
        let mut sync = self.sync.lock().await;
        sync.set_view(self.config.initial_center, self.config.initial_zoom);
        sync.invalidate_size();
    }

    /// Shared handle to the synchronizer, for callers wiring their own
    /// event sources.
    pub fn synchronizer(&self) -> Arc<Mutex<RouteSync<V, R>>> {
        Arc::clone(&self.sync)
    }

    /// Add-marker action: drop a labeled marker at `position` (the UI
    /// passes the current map center).
    pub async fn add_marker_at(&self, position: LatLng) -> Option<MarkerId> {
        self.sync
            .lock()
            .await
            .add_marker(position, Some(DEFAULT_MARKER_LABEL.to_string()))
            .await
    }

    /// Drag-end event from a marker handle.
    pub async fn on_marker_dragged(&self, id: MarkerId, position: LatLng) {
        self.sync.lock().await.move_marker(id, position).await;
    }

    pub async fn remove_marker(&self, id: MarkerId) {
        self.sync.lock().await.remove_marker(id).await;
    }

    /// Shape-created event from the draw toolkit.
    pub async fn on_shape_created(&self, shape: Shape) {
        self.sync.lock().await.add_shape(shape);
    }

    /// Container resize. Safe to call redundantly.
    pub async fn on_resize(&self) {
        self.sync.lock().await.invalidate_size();
    }

    /// Rebuild the map surface after a container remount, replaying the
    /// held markers through the live placement path.
    pub async fn remount(&self, view: V) {
        let mut sync = self.sync.lock().await;
        sync.detach_view();
        sync.attach_view(view).await;
    }

    pub async fn markers(&self) -> Vec<Marker> {
        self.sync.lock().await.markers().to_vec()
    }

    pub async fn save_snapshot(&self) -> FeatureCollection {
        self.sync.lock().await.save_snapshot()
    }

    /// Search keystroke; debounced, see [`crate::search`].
    pub fn search(&mut self, query: &str) {
        self.search.set_query(query);
    }

    /// Wait for a pending debounced search to finish (test and shutdown
    /// hook).
    pub async fn settle_search(&mut self) {
        self.search.settle().await;
    }

    pub fn search_results(&self) -> Vec<SearchResult> {
        self.search.results()
    }

    /// Pick a search candidate: remember it and center the view on it.
    pub async fn choose_area(&mut self, area: SearchResult) {
        let position = area.position;
        self.search.select_area(area);
        self.sync
            .lock()
            .await
            .set_view(position, self.config.initial_zoom);
    }

    pub fn selected_area(&self) -> Option<SearchResult> {
        self.search.selected_area()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }
}
