//! Error taxonomy for the external spatial services.
//!
//! Both errors are recoverable by design: the synchronizer degrades to an
//! empty overlay set and the search session degrades to an empty result
//! list. Neither is allowed to cross the component boundary as a panic.

use thiserror::Error;

/// Failure while fetching a route from the routing service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("routing request failed: {0}")]
    Transport(String),
    #[error("routing response could not be decoded: {0}")]
    MalformedResponse(String),
    /// The service answered but found no route for the given waypoints.
    #[error("no route found for the given waypoints")]
    NoRoute,
}

/// Failure while searching for a place.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("place search request failed: {0}")]
    Transport(String),
    #[error("place search response could not be decoded: {0}")]
    MalformedResponse(String),
}
