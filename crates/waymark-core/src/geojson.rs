//! GeoJSON interchange types for the draw-layer snapshot export.
//!
//! GeoJSON coordinate arrays are `[longitude, latitude]` while the rest of
//! this crate is latitude-first. The inversion happens here and nowhere else.

use crate::models::LatLng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Convert an internal position into a GeoJSON coordinate pair.
pub fn lng_lat(position: LatLng) -> [f64; 2] {
    [position.lng, position.lat]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            geometry,
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            collection_type: "FeatureCollection".to_string(),
            features,
        }
    }
}

/// Build a closed polygon ring, appending the first vertex if the caller
/// did not close the ring themselves (first == last).
pub fn closed_ring(vertices: &[LatLng]) -> Vec<[f64; 2]> {
    let mut ring: Vec<[f64; 2]> = vertices.iter().copied().map(lng_lat).collect();
    match (ring.first().copied(), ring.last().copied()) {
        (Some(first), Some(last)) if first != last => ring.push(first),
        _ => {}
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lng_lat_inverts_axis_order() {
        assert_eq!(lng_lat(LatLng::new(55.75, 37.61)), [37.61, 55.75]);
    }

    #[test]
    fn closed_ring_appends_missing_closing_vertex() {
        let ring = closed_ring(&[
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
        ]);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn closed_ring_leaves_already_closed_ring_alone() {
        let ring = closed_ring(&[
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(0.0, 0.0),
        ]);
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn feature_collection_serializes_with_geojson_type_tags() {
        let collection = FeatureCollection::new(vec![Feature::new(Geometry::Point {
            coordinates: [37.61, 55.75],
        })]);
        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["type"], "Feature");
        assert_eq!(json["features"][0]["geometry"]["type"], "Point");
        assert_eq!(json["features"][0]["geometry"]["coordinates"][0], 37.61);
    }
}
