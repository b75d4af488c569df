//! Draw-layer shape store.
//!
//! The draw toolkit itself is an external collaborator; it emits created
//! shapes as events and asks for a GeoJSON export on demand. This module
//! only holds the shapes and performs the export.

use crate::geojson::{closed_ring, lng_lat, Feature, FeatureCollection, Geometry};
use crate::models::LatLng;
use serde::{Deserialize, Serialize};

/// A shape drawn by the user on top of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Marker {
        position: LatLng,
    },
    Polyline {
        points: Vec<LatLng>,
    },
    Polygon {
        vertices: Vec<LatLng>,
    },
    Rectangle {
        south_west: LatLng,
        north_east: LatLng,
    },
    /// GeoJSON has no circle geometry; circles export as a Point feature
    /// carrying the radius as a property.
    Circle {
        center: LatLng,
        radius_m: f64,
    },
}

impl Shape {
    pub fn to_feature(&self) -> Feature {
        match self {
            Shape::Marker { position } => Feature::new(Geometry::Point {
                coordinates: lng_lat(*position),
            }),
            Shape::Polyline { points } => Feature::new(Geometry::LineString {
                coordinates: points.iter().copied().map(lng_lat).collect(),
            }),
            Shape::Polygon { vertices } => Feature::new(Geometry::Polygon {
                coordinates: vec![closed_ring(vertices)],
            }),
            Shape::Rectangle {
                south_west,
                north_east,
            } => {
                let ring = [
                    *south_west,
                    LatLng::new(south_west.lat, north_east.lng),
                    *north_east,
                    LatLng::new(north_east.lat, south_west.lng),
                ];
                Feature::new(Geometry::Polygon {
                    coordinates: vec![closed_ring(&ring)],
                })
            }
            Shape::Circle { center, radius_m } => Feature::new(Geometry::Point {
                coordinates: lng_lat(*center),
            })
            .with_property("radius", *radius_m),
        }
    }
}

/// Owned collection of drawn shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawLayer {
    shapes: Vec<Shape>,
}

impl DrawLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Export all shapes as a GeoJSON feature collection, one feature per
    /// shape, coordinates in [lng, lat] order.
    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection::new(self.shapes.iter().map(Shape::to_feature).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_exports_as_point_with_inverted_axes() {
        let mut layer = DrawLayer::new();
        layer.add(Shape::Marker {
            position: LatLng::new(55.75, 37.61),
        });

        let collection = layer.to_geojson();
        assert_eq!(collection.features.len(), 1);
        assert_eq!(
            collection.features[0].geometry,
            Geometry::Point {
                coordinates: [37.61, 55.75]
            }
        );
    }

    #[test]
    fn polygon_exports_closed_ring() {
        let mut layer = DrawLayer::new();
        layer.add(Shape::Polygon {
            vertices: vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 1.0),
                LatLng::new(1.0, 0.5),
            ],
        });

        let feature = &layer.to_geojson().features[0];
        let Geometry::Polygon { coordinates } = &feature.geometry else {
            panic!("expected polygon geometry");
        };
        assert_eq!(coordinates[0].len(), 4);
        assert_eq!(coordinates[0].first(), coordinates[0].last());
    }

    #[test]
    fn rectangle_exports_five_vertex_ring() {
        let shape = Shape::Rectangle {
            south_west: LatLng::new(0.0, 0.0),
            north_east: LatLng::new(1.0, 2.0),
        };
        let Geometry::Polygon { coordinates } = shape.to_feature().geometry else {
            panic!("expected polygon geometry");
        };
        assert_eq!(coordinates[0].len(), 5);
        assert_eq!(coordinates[0][1], [2.0, 0.0]);
        assert_eq!(coordinates[0][2], [2.0, 1.0]);
    }

    #[test]
    fn circle_exports_point_with_radius_property() {
        let shape = Shape::Circle {
            center: LatLng::new(55.75, 37.61),
            radius_m: 120.0,
        };
        let feature = shape.to_feature();
        assert_eq!(
            feature.geometry,
            Geometry::Point {
                coordinates: [37.61, 55.75]
            }
        );
        assert_eq!(feature.properties["radius"], 120.0);
    }
}
