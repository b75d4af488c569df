//! OSRM routing client.

use reqwest::Client;
use std::time::Duration;
use waymark_core::{LatLng, RoutePath, RoutingClient, RoutingError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the OSRM `route/v1` API.
pub struct OsrmClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, serde::Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, serde::Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString geometry: coordinates come back [lng, lat].
#[derive(Debug, serde::Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }
}

/// Build the OSRM coordinate path segment. OSRM wants `lng,lat` pairs
/// separated by `;` — the same axis inversion as GeoJSON.
fn coordinate_path(waypoints: &[LatLng]) -> String {
    waypoints
        .iter()
        .map(|p| format!("{},{}", p.lng, p.lat))
        .collect::<Vec<_>>()
        .join(";")
}

fn to_route_path(waypoints: &[LatLng], route: OsrmRoute) -> RoutePath {
    RoutePath {
        waypoints: waypoints.to_vec(),
        geometry: route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| LatLng::new(lat, lng))
            .collect(),
        distance_m: route.distance,
        duration_s: route.duration,
    }
}

impl RoutingClient for OsrmClient {
    async fn route(&self, waypoints: &[LatLng]) -> Result<RoutePath, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::NoRoute);
        }

        let url = format!(
            "{}/route/v1/driving/{}",
            self.base_url,
            coordinate_path(waypoints)
        );
        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| RoutingError::Transport(err.to_string()))?;

        let body: OsrmResponse = response
            .json()
            .await
            .map_err(|err| RoutingError::MalformedResponse(err.to_string()))?;

        if body.code != "Ok" {
            tracing::debug!(code = %body.code, "OSRM returned non-Ok code");
            return Err(RoutingError::NoRoute);
        }
        let route = body.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        Ok(to_route_path(waypoints, route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_path_is_lng_first_semicolon_separated() {
        let path = coordinate_path(&[LatLng::new(55.75, 37.61), LatLng::new(55.76, 37.62)]);
        assert_eq!(path, "37.61,55.75;37.62,55.76");
    }

    #[test]
    fn response_geometry_converts_back_to_lat_first() {
        let raw = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1523.4,
                "duration": 210.7,
                "geometry": {"coordinates": [[37.61, 55.75], [37.62, 55.76]]}
            }]
        }"#;
        let body: OsrmResponse = serde_json::from_str(raw).unwrap();
        let waypoints = [LatLng::new(55.75, 37.61), LatLng::new(55.76, 37.62)];
        let route = body.routes.into_iter().next().unwrap();
        let path = to_route_path(&waypoints, route);

        assert_eq!(path.geometry[0], LatLng::new(55.75, 37.61));
        assert_eq!(path.distance_m, 1523.4);
        assert_eq!(path.duration_s, 210.7);
        assert_eq!(path.waypoints, waypoints.to_vec());
    }

    #[test]
    fn non_ok_code_decodes_with_empty_routes() {
        let raw = r#"{"code": "NoRoute"}"#;
        let body: OsrmResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.code, "NoRoute");
        assert!(body.routes.is_empty());
    }
}
