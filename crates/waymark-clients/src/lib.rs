//! HTTP clients for the external spatial services.
//!
//! All spatial computation is delegated: Nominatim answers free-text place
//! searches, OSRM computes driving routes. Each client implements the
//! corresponding port trait from `waymark-core`.

pub mod geocode;
pub mod routing;

pub use geocode::NominatimClient;
pub use routing::OsrmClient;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";
