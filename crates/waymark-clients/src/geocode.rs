//! Nominatim place-search client.

use reqwest::Client;
use std::time::Duration;
use waymark_core::{GeocodeError, GeocodingClient, LatLng, SearchResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("waymark/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Nominatim search API.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

/// One search hit as Nominatim returns it: coordinates are strings and the
/// longitude field is named `lon`, not `lng`.
#[derive(Debug, serde::Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                // Nominatim's usage policy rejects requests without one.
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }
}

impl GeocodingClient for NominatimClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|err| GeocodeError::MalformedResponse(err.to_string()))?;

        Ok(places.into_iter().filter_map(to_search_result).collect())
    }
}

/// Parse a raw hit into the internal shape, renaming `lon` to `lng`.
/// Entries with unparsable coordinates are dropped.
fn to_search_result(place: NominatimPlace) -> Option<SearchResult> {
    let lat: f64 = place.lat.parse().ok()?;
    let lng: f64 = place.lon.parse().ok()?;
    Some(SearchResult {
        name: place.display_name,
        position: LatLng::new(lat, lng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_coordinates_and_renames_lon() {
        let raw = r#"[
            {"display_name": "Moscow, Russia", "lat": "55.7558", "lon": "37.6176"},
            {"display_name": "Bad entry", "lat": "not-a-number", "lon": "0"}
        ]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(raw).unwrap();
        let results: Vec<SearchResult> =
            places.into_iter().filter_map(to_search_result).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Moscow, Russia");
        assert_eq!(results[0].position, LatLng::new(55.7558, 37.6176));
    }
}
