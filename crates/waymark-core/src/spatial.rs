//! Spatial math helpers.

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two points in meters using the Haversine
/// formula (great-circle distance on a sphere).
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111_194.0).abs() < 100.0);
    }

    #[test]
    fn haversine_same_point() {
        let dist = haversine_distance(55.7558, 37.6176, 55.7558, 37.6176);
        assert!(dist < 0.001);
    }
}
