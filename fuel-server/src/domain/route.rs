//! Route geometry returned by a routing provider.

use super::error::DomainError;
use super::geo_point::GeoPoint;

/// The path a vehicle travels, with its length in miles.
///
/// Immutable once built. A path with fewer than two points is allowed but
/// is treated as degenerate by the geometry code.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    points: Vec<GeoPoint>,
    length_miles: f64,
}

impl RoutePath {
    /// Create a route. The length must be finite and non-negative.
    pub fn new(points: Vec<GeoPoint>, length_miles: f64) -> Result<Self, DomainError> {
        if !length_miles.is_finite() {
            return Err(DomainError::InvalidRoute("length must be finite"));
        }
        if length_miles < 0.0 {
            return Err(DomainError::InvalidRoute("length must not be negative"));
        }
        Ok(Self {
            points,
            length_miles,
        })
    }

    /// The ordered geodetic points of the path.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Total route length in miles.
    pub fn length_miles(&self) -> f64 {
        self.length_miles
    }

    /// True if the path cannot form a line.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat).unwrap()
    }

    #[test]
    fn valid_route() {
        let route = RoutePath::new(vec![pt(-75.0, 40.0), pt(-76.0, 41.0)], 100.0).unwrap();
        assert_eq!(route.points().len(), 2);
        assert_eq!(route.length_miles(), 100.0);
        assert!(!route.is_degenerate());
    }

    #[test]
    fn rejects_bad_length() {
        assert!(RoutePath::new(vec![], -1.0).is_err());
        assert!(RoutePath::new(vec![], f64::NAN).is_err());
        assert!(RoutePath::new(vec![], f64::INFINITY).is_err());
    }

    #[test]
    fn short_paths_are_degenerate() {
        assert!(RoutePath::new(vec![], 0.0).unwrap().is_degenerate());
        assert!(RoutePath::new(vec![pt(0.0, 0.0)], 0.0).unwrap().is_degenerate());
    }
}
