//! OpenRouteService directions types (GeoJSON format).
//!
//! Only the fields the planner needs are modelled; everything else in the
//! response is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, RoutePath};

use super::error::RoutingError;

/// Miles per meter, for converting the provider's distances.
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Body of a directions request: `[[lon, lat], [lon, lat]]`.
#[derive(Debug, Serialize)]
pub struct DirectionsRequest {
    pub coordinates: [[f64; 2]; 2],
}

impl DirectionsRequest {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            coordinates: [[start.lon(), start.lat()], [end.lon(), end.lat()]],
        }
    }
}

/// A GeoJSON feature collection of routes.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

/// One route.
#[derive(Debug, Deserialize)]
pub struct RouteFeature {
    pub geometry: LineGeometry,
    #[serde(default)]
    pub properties: RouteProperties,
}

/// LineString geometry. Positions may carry a third (elevation) value.
#[derive(Debug, Deserialize)]
pub struct LineGeometry {
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub summary: Option<RouteSummary>,
}

/// Route totals. Distance in meters; absent for zero-length routes.
#[derive(Debug, Deserialize)]
pub struct RouteSummary {
    pub distance: Option<f64>,
}

impl FeatureCollection {
    /// Convert the first route into a [`RoutePath`] measured in miles.
    pub fn into_route_path(self) -> Result<RoutePath, RoutingError> {
        let feature = self
            .features
            .into_iter()
            .next()
            .ok_or(RoutingError::NoRoute)?;

        let points = feature
            .geometry
            .coordinates
            .iter()
            .map(|position| match position.as_slice() {
                [lon, lat, ..] => GeoPoint::new(*lon, *lat).map_err(RoutingError::from),
                _ => Err(RoutingError::Json {
                    message: format!("position has {} values, expected at least 2", position.len()),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if points.len() < 2 {
            return Err(RoutingError::NoRoute);
        }

        let degenerate = points.iter().all(|p| *p == points[0]);
        let distance = feature.properties.summary.and_then(|s| s.distance);
        let meters = match distance {
            Some(d) if d == 0.0 && !degenerate => {
                return Err(RoutingError::Json {
                    message: "route distance is zero but its geometry is not".to_string(),
                });
            }
            Some(d) => d,
            None if degenerate => 0.0,
            None => {
                return Err(RoutingError::Json {
                    message: "route summary has no distance".to_string(),
                });
            }
        };

        Ok(RoutePath::new(points, meters * MILES_PER_METER)?)
    }
}
