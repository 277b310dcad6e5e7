//! Linear referencing: turning a position near a route into a mile marker.

use geo::{LineLocatePoint, LineString, Point};

use crate::domain::{GeoPoint, RoutePath};

use super::projection::{PlanarProjection, WebMercator, planar_length, project_path};

/// Projects points onto one route.
///
/// The route is projected once at construction, so referencing many
/// stations against the same route does not repeat that work.
#[derive(Debug, Clone)]
pub struct LinearReferencer<P = WebMercator> {
    projection: P,
    line: LineString<f64>,
    planar_length: f64,
    total_length: f64,
}

impl<P: PlanarProjection> LinearReferencer<P> {
    /// Reference against `route`, scaling results to the route's own length in miles.
    pub fn new(route: &RoutePath, projection: P) -> Self {
        Self::with_total_length(route, route.length_miles(), projection)
    }

    /// Reference against `route`, scaling results to `total_length`.
    pub fn with_total_length(route: &RoutePath, total_length: f64, projection: P) -> Self {
        let line = project_path(&projection, route.points());
        let planar_length = planar_length(&line);
        Self {
            projection,
            line,
            planar_length,
            total_length: total_length.max(0.0),
        }
    }

    /// Distance along the route of the point on it nearest to `point`.
    ///
    /// Always within `[0, total_length]`. Points beyond either end snap to
    /// that end. A zero-length route places everything at 0.
    pub fn project(&self, point: GeoPoint) -> f64 {
        if !(self.planar_length.is_finite() && self.planar_length > 0.0) {
            return 0.0;
        }
        let projected = Point::from(self.projection.forward(point));
        let fraction = self
            .line
            .line_locate_point(&projected)
            .filter(|f| f.is_finite())
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        (fraction * self.total_length).clamp(0.0, self.total_length)
    }

    /// The length results are scaled to.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }
}

/// One-shot linear reference of `point` against `route`.
pub fn project_point<P: PlanarProjection>(
    route: &RoutePath,
    point: GeoPoint,
    total_length: f64,
    projection: P,
) -> f64 {
    LinearReferencer::with_total_length(route, total_length, projection).project(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::projection::planar_distance;

    fn pt(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat).unwrap()
    }

    fn equator_route() -> RoutePath {
        RoutePath::new(vec![pt(0.0, 0.0), pt(1.0, 0.0)], 69.0).unwrap()
    }

    #[test]
    fn midpoint_maps_to_half_length() {
        let miles = project_point(&equator_route(), pt(0.5, 0.05), 69.0, WebMercator);
        assert!((miles - 34.5).abs() < 1e-9);
    }

    #[test]
    fn scales_to_caller_length() {
        let referencer = LinearReferencer::with_total_length(&equator_route(), 100.0, WebMercator);
        assert!((referencer.project(pt(0.25, -0.1)) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn points_past_the_ends_are_clamped() {
        let referencer = LinearReferencer::new(&equator_route(), WebMercator);
        assert_eq!(referencer.project(pt(-0.5, 0.0)), 0.0);
        assert_eq!(referencer.project(pt(1.5, 0.0)), 69.0);
    }

    #[test]
    fn follows_bends_in_the_route() {
        let route = RoutePath::new(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)], 100.0).unwrap();
        let referencer = LinearReferencer::new(&route, WebMercator);

        let a = WebMercator.forward(pt(0.0, 0.0));
        let b = WebMercator.forward(pt(1.0, 0.0));
        let c = WebMercator.forward(pt(1.0, 0.5));
        let d = WebMercator.forward(pt(1.0, 1.0));
        let expected = (planar_distance(a, b) + planar_distance(b, c))
            / (planar_distance(a, b) + planar_distance(b, d))
            * 100.0;

        let miles = referencer.project(pt(1.02, 0.5));
        assert!((miles - expected).abs() < 1e-6, "{miles} vs {expected}");
    }

    #[test]
    fn zero_length_route_places_everything_at_start() {
        let route = RoutePath::new(vec![pt(1.0, 1.0), pt(1.0, 1.0)], 0.0).unwrap();
        assert_eq!(project_point(&route, pt(3.0, 3.0), 0.0, WebMercator), 0.0);

        let empty = RoutePath::new(vec![], 10.0).unwrap();
        assert_eq!(project_point(&empty, pt(3.0, 3.0), 10.0, WebMercator), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Mile markers never leave [0, total_length]
        #[test]
        fn result_within_route(
            lon in -180.0f64..=180.0,
            lat in -90.0f64..=90.0,
            total in 0.0f64..5000.0,
        ) {
            let route = RoutePath::new(
                vec![
                    GeoPoint::new(-100.0, 35.0).unwrap(),
                    GeoPoint::new(-95.0, 37.0).unwrap(),
                    GeoPoint::new(-90.0, 36.0).unwrap(),
                ],
                total,
            ).unwrap();
            let miles = LinearReferencer::new(&route, WebMercator)
                .project(GeoPoint::new(lon, lat).unwrap());
            prop_assert!((0.0..=total).contains(&miles));
        }

        /// Moving east along a straight eastward route never moves the marker backwards
        #[test]
        fn monotonic_along_straight_route(a in 0.0f64..10.0, b in 0.0f64..10.0) {
            let route = RoutePath::new(
                vec![GeoPoint::new(0.0, 10.0).unwrap(), GeoPoint::new(10.0, 10.0).unwrap()],
                690.0,
            ).unwrap();
            let referencer = LinearReferencer::new(&route, WebMercator);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let m_lo = referencer.project(GeoPoint::new(lo, 10.2).unwrap());
            let m_hi = referencer.project(GeoPoint::new(hi, 9.8).unwrap());
            prop_assert!(m_lo <= m_hi + 1e-9);
        }
    }
}
