//! Route providers.
//!
//! A route provider turns a start and end point into the geometry and
//! length of the route a vehicle would drive. The production provider is
//! OpenRouteService; a fixed-route provider serves offline development and
//! tests.

mod client;
mod error;
mod fixture;
mod types;

use std::future::Future;

use crate::domain::{GeoPoint, RoutePath};

pub use client::{OrsClient, OrsConfig};
pub use error::RoutingError;
pub use fixture::StaticRouteProvider;
pub use types::{FeatureCollection, MILES_PER_METER};

/// Trait for fetching routes.
///
/// This abstraction allows the optimizer to be tested with fixed routes.
pub trait RouteProvider: Send + Sync {
    /// Get the route from `start` to `end`, with its length in miles.
    fn route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> impl Future<Output = Result<RoutePath, RoutingError>> + Send;
}
