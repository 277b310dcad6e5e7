//! Corridor filtering: which stations lie close enough to a route.

use geo::{BoundingRect, Closest, ClosestPoint, Coord, LineString, Point, Rect};

use crate::domain::{GeoPoint, RoutePath, Station};

use super::projection::{PlanarProjection, WebMercator, planar_distance, project_path};

/// The buffered area around a route.
///
/// A point is inside the corridor when its planar distance to the projected
/// route line is at most `radius_m`. This is the same region as a buffer
/// polygon with round caps and joins.
#[derive(Debug, Clone)]
pub struct Corridor<P = WebMercator> {
    projection: P,
    line: LineString<f64>,
    radius_m: f64,
    envelope: Option<Rect<f64>>,
}

impl<P: PlanarProjection> Corridor<P> {
    /// Build the corridor of `radius_m` meters around `route`.
    ///
    /// A degenerate route yields an empty corridor.
    pub fn around(route: &RoutePath, radius_m: f64, projection: P) -> Self {
        let radius_m = radius_m.max(0.0);
        let line = if route.is_degenerate() {
            LineString::new(Vec::new())
        } else {
            project_path(&projection, route.points())
        };
        let envelope = line.bounding_rect().map(|rect| {
            let min = projection.inverse(Coord {
                x: rect.min().x - radius_m,
                y: rect.min().y - radius_m,
            });
            let max = projection.inverse(Coord {
                x: rect.max().x + radius_m,
                y: rect.max().y + radius_m,
            });
            Rect::new(
                Coord {
                    x: min.lon(),
                    y: min.lat(),
                },
                Coord {
                    x: max.lon(),
                    y: max.lat(),
                },
            )
        });

        Self {
            projection,
            line,
            radius_m,
            envelope,
        }
    }

    /// Buffer radius in planar meters.
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Geodetic bounding box of the corridor (x = longitude, y = latitude).
    ///
    /// `None` for an empty corridor. Suitable for coarse pre-selection by a
    /// station store; it does not handle routes crossing the antimeridian.
    pub fn envelope(&self) -> Option<Rect<f64>> {
        self.envelope
    }

    /// True if the point lies within the corridor's envelope.
    pub fn envelope_contains(&self, point: GeoPoint) -> bool {
        self.envelope.is_some_and(|rect| {
            (rect.min().x..=rect.max().x).contains(&point.lon())
                && (rect.min().y..=rect.max().y).contains(&point.lat())
        })
    }

    /// True if the point lies within `radius_m` of the route.
    pub fn contains(&self, point: GeoPoint) -> bool {
        let projected = self.projection.forward(point);
        match self.line.closest_point(&Point::from(projected)) {
            Closest::Intersection(_) => true,
            Closest::SinglePoint(nearest) => {
                planar_distance(nearest.into(), projected) <= self.radius_m
            }
            Closest::Indeterminate => false,
        }
    }

    /// Select the candidates inside the corridor, preserving their order.
    pub fn filter<'a>(&self, candidates: impl IntoIterator<Item = &'a Station>) -> Vec<Station> {
        candidates
            .into_iter()
            .filter(|s| self.envelope_contains(s.position) && self.contains(s.position))
            .cloned()
            .collect()
    }
}

/// Return the stations within `radius_m` meters of `route`.
pub fn filter_stations<P: PlanarProjection>(
    route: &RoutePath,
    candidates: &[Station],
    radius_m: f64,
    projection: P,
) -> Vec<Station> {
    Corridor::around(route, radius_m, projection).filter(candidates)
}
