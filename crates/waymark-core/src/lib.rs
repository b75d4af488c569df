pub mod draw;
pub mod error;
pub mod geojson;
pub mod models;
pub mod spatial;
pub mod sync;

pub use draw::{DrawLayer, Shape};
pub use error::{GeocodeError, RoutingError};
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use models::{LatLng, Marker, MarkerId, OverlayId, RoutePath, SearchResult};
pub use spatial::haversine_distance;
pub use sync::{GeocodingClient, MapView, RouteSync, RoutingClient};
