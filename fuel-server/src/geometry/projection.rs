//! Planar projections between geodetic and planar coordinates.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use geo::{Coord, LineString};

use crate::domain::GeoPoint;

/// A projection from WGS84 degrees onto a plane measured in meters.
///
/// Corridor buffering and linear referencing measure distances in the
/// projected plane, so a projection must be close to distance-preserving
/// in the region of the route for results to be meaningful.
pub trait PlanarProjection: Send + Sync {
    /// Geodetic to planar.
    fn forward(&self, point: GeoPoint) -> Coord<f64>;

    /// Planar to geodetic. Output is clamped into the valid coordinate range.
    fn inverse(&self, coord: Coord<f64>) -> GeoPoint;
}

/// Spherical Web Mercator (EPSG:3857).
///
/// Scale grows with `1 / cos(latitude)`, so buffers and distances are
/// inflated away from the equator and unusable near the poles. Latitudes
/// beyond ±85.0511° are clamped to the projection's limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebMercator;

const EARTH_RADIUS_M: f64 = 6_378_137.0;
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

impl PlanarProjection for WebMercator {
    fn forward(&self, point: GeoPoint) -> Coord<f64> {
        let lat = point.lat().clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        let x = EARTH_RADIUS_M * point.lon().to_radians();
        let y = EARTH_RADIUS_M * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
        Coord { x, y }
    }

    fn inverse(&self, coord: Coord<f64>) -> GeoPoint {
        let lon = (coord.x / EARTH_RADIUS_M).to_degrees();
        let lat = (2.0 * (coord.y / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees();
        GeoPoint::clamped(lon, lat)
    }
}

/// Project a geodetic path into a planar line.
pub fn project_path<P: PlanarProjection + ?Sized>(projection: &P, points: &[GeoPoint]) -> LineString<f64> {
    LineString::new(points.iter().map(|p| projection.forward(*p)).collect())
}

/// Euclidean distance between two planar coordinates.
pub fn planar_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Total planar length of a line.
pub fn planar_length(line: &LineString<f64>) -> f64 {
    line.lines()
        .map(|segment| planar_distance(segment.start, segment.end))
        .sum()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// forward then inverse returns the original point
        #[test]
        fn roundtrip(lon in -180.0f64..=180.0, lat in -85.0f64..=85.0) {
            let p = GeoPoint::new(lon, lat).unwrap();
            let back = WebMercator.inverse(WebMercator.forward(p));
            prop_assert!((back.lon() - lon).abs() < 1e-9);
            prop_assert!((back.lat() - lat).abs() < 1e-9);
        }

        /// the projection preserves ordering along both axes
        #[test]
        fn monotonic(lon in -179.0f64..179.0, lat in -84.0f64..84.0) {
            let a = WebMercator.forward(GeoPoint::new(lon, lat).unwrap());
            let b = WebMercator.forward(GeoPoint::new(lon + 0.5, lat + 0.5).unwrap());
            prop_assert!(b.x > a.x);
            prop_assert!(b.y > a.y);
        }
    }
}
