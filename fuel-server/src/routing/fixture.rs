//! Fixed route provider for development and testing without API access.
//!
//! Serves one preloaded route for every request, regardless of the
//! requested endpoints.

use std::path::Path;
use std::sync::Arc;

use crate::domain::{GeoPoint, RoutePath};

use super::RouteProvider;
use super::error::RoutingError;
use super::types::FeatureCollection;

/// Route provider that always returns the same route.
#[derive(Debug, Clone)]
pub struct StaticRouteProvider {
    route: Arc<RoutePath>,
}

impl StaticRouteProvider {
    pub fn new(route: RoutePath) -> Self {
        Self {
            route: Arc::new(route),
        }
    }

    /// Load a route saved from an OpenRouteService GeoJSON directions response.
    pub fn from_geojson_file(path: impl AsRef<Path>) -> Result<Self, RoutingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| RoutingError::Fixture {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        let collection: FeatureCollection =
            serde_json::from_str(&json).map_err(|e| RoutingError::Fixture {
                message: format!("failed to parse {}: {e}", path.display()),
            })?;
        Ok(Self::new(collection.into_route_path()?))
    }

    pub fn route_path(&self) -> &RoutePath {
        &self.route
    }
}

impl RouteProvider for StaticRouteProvider {
    async fn route(&self, _start: GeoPoint, _end: GeoPoint) -> Result<RoutePath, RoutingError> {
        Ok(self.route.as_ref().clone())
    }
}
