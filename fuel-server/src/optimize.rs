//! End-to-end optimization: route, corridor, stations, plan.

use std::collections::HashMap;

use crate::domain::{GeoPoint, ProjectedStation, RoutePath, Station, StationId, VehicleProfile};
use crate::geometry::{Corridor, LinearReferencer, PlanarProjection, WebMercator};
use crate::planner::{RefuelPlan, RefuelPlanner, RouteUnreachable};
use crate::routing::{RouteProvider, RoutingError};
use crate::stations::{StationError, StationRepository};

/// Errors that can occur while optimizing a trip.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    /// The route provider failed
    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),

    /// The station store failed
    #[error("station lookup failed: {0}")]
    Stations(#[from] StationError),

    /// The vehicle cannot complete the route
    #[error(transparent)]
    Unreachable(#[from] RouteUnreachable),
}

/// A trip to optimize.
#[derive(Debug, Clone, Copy)]
pub struct TripRequest {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub vehicle: VehicleProfile,
}

/// Result of a successful optimization.
#[derive(Debug, Clone)]
pub struct Optimization {
    pub route: RoutePath,
    pub plan: RefuelPlan,
    /// Every station found in the corridor, keyed by ID.
    pub stations: HashMap<StationId, Station>,
}

impl Optimization {
    /// Look up a station from the corridor by ID.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }
}

/// Runs the full pipeline for one trip.
///
/// Generic over the route provider, station store and projection so each
/// can be swapped in tests.
pub struct RouteOptimizer<R, S, P = WebMercator> {
    routes: R,
    stations: S,
    planner: RefuelPlanner,
    projection: P,
}

impl<R: RouteProvider, S: StationRepository> RouteOptimizer<R, S, WebMercator> {
    /// Create an optimizer using the Web Mercator projection.
    pub fn new(routes: R, stations: S, planner: RefuelPlanner) -> Self {
        Self::with_projection(routes, stations, planner, WebMercator)
    }
}

impl<R, S, P> RouteOptimizer<R, S, P>
where
    R: RouteProvider,
    S: StationRepository,
    P: PlanarProjection + Clone,
{
    pub fn with_projection(routes: R, stations: S, planner: RefuelPlanner, projection: P) -> Self {
        Self {
            routes,
            stations,
            planner,
            projection,
        }
    }

    pub fn routes(&self) -> &R {
        &self.routes
    }

    pub fn stations(&self) -> &S {
        &self.stations
    }

    pub fn planner(&self) -> &RefuelPlanner {
        &self.planner
    }

    /// Fetch the route, find stations along it, and plan purchases.
    pub async fn optimize(&self, trip: &TripRequest) -> Result<Optimization, OptimizeError> {
        let route = self.routes.route(trip.start, trip.end).await?;
        let total_distance = route.length_miles();

        let corridor = Corridor::around(
            &route,
            self.planner.config().corridor_radius_m(),
            self.projection.clone(),
        );
        let candidates = self.stations.stations_in_corridor(&corridor).await?;

        let projected = project_stations(&route, &candidates, self.projection.clone());
        let plan = self.planner.plan(&projected, total_distance, &trip.vehicle)?;

        tracing::info!(
            start = %trip.start,
            end = %trip.end,
            miles = total_distance,
            corridor_stations = candidates.len(),
            stops = plan.stops().len(),
            total_cost = plan.rounded_total_cost(),
            "planned trip"
        );

        Ok(Optimization {
            route,
            plan,
            stations: candidates.into_iter().map(|s| (s.id, s)).collect(),
        })
    }
}

/// Place stations on the route and order them by mile marker, then ID.
fn project_stations<P: PlanarProjection>(
    route: &RoutePath,
    stations: &[Station],
    projection: P,
) -> Vec<ProjectedStation> {
    let referencer = LinearReferencer::new(route, projection);
    let mut projected: Vec<_> = stations
        .iter()
        .map(|s| ProjectedStation::new(s.id, referencer.project(s.position), s.price))
        .collect();
    projected.sort_by(|a, b| {
        a.position
            .total_cmp(&b.position)
            .then(a.station_id.cmp(&b.station_id))
    });
    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::PlannerConfig;
    use crate::routing::StaticRouteProvider;
    use crate::stations::InMemoryStations;

    fn pt(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat).unwrap()
    }

    /// Straight route along latitude 35 from -100 to -95, 283 miles long.
    fn route() -> RoutePath {
        RoutePath::new(vec![pt(-100.0, 35.0), pt(-95.0, 35.0)], 283.0).unwrap()
    }

    fn station(id: u64, lon: f64, lat: f64, price: f64) -> Station {
        Station::new(StationId(id), pt(lon, lat), price)
            .with_details(format!("Station {id}"), "Town", "OK")
    }

    /// Stations every fifth of the route, plus a very cheap one far off it.
    fn stations() -> Vec<Station> {
        vec![
            station(1, -99.0, 35.0, 3.0),
            station(2, -98.0, 35.0, 2.5),
            station(3, -97.0, 35.0, 3.5),
            station(4, -96.0, 35.0, 3.0),
            station(5, -97.5, 38.0, 1.0),
        ]
    }

    fn optimizer() -> RouteOptimizer<StaticRouteProvider, InMemoryStations> {
        RouteOptimizer::new(
            StaticRouteProvider::new(route()),
            InMemoryStations::from_stations(stations()),
            RefuelPlanner::default(),
        )
    }

    fn trip(tank: f64, mpg: f64, start_fuel: f64) -> TripRequest {
        TripRequest {
            start: pt(-100.0, 35.0),
            end: pt(-95.0, 35.0),
            vehicle: VehicleProfile::new(tank, mpg, start_fuel).unwrap(),
        }
    }

    #[tokio::test]
    async fn plans_along_the_corridor() {
        let result = optimizer().optimize(&trip(10.0, 10.0, 6.0)).await.unwrap();

        let ids: Vec<_> = result.plan.stops().iter().map(|s| s.station_id).collect();
        assert_eq!(ids, vec![StationId(1), StationId(2), StationId(3), StationId(4)]);

        // 5.32 @ 3.0 + 10 @ 2.5 + 1.32 @ 3.5 + 5.66 @ 3.0
        assert!((result.plan.total_cost() - 62.56).abs() < 1e-6);
        assert_eq!(result.plan.rounded_total_cost(), 62.56);

        let positions: Vec<_> = result.plan.stops().iter().map(|s| s.rounded_position()).collect();
        assert_eq!(positions, vec![56.6, 113.2, 169.8, 226.4]);
    }

    #[tokio::test]
    async fn off_corridor_stations_are_ignored() {
        let result = optimizer().optimize(&trip(10.0, 10.0, 6.0)).await.unwrap();

        assert_eq!(result.stations.len(), 4);
        assert!(result.station(StationId(5)).is_none());
        assert_eq!(result.station(StationId(2)).unwrap().name, "Station 2");
    }

    #[tokio::test]
    async fn full_tank_with_enough_range_needs_no_stops() {
        let result = optimizer().optimize(&trip(50.0, 10.0, 50.0)).await.unwrap();
        assert!(result.plan.is_empty());
        assert_eq!(result.plan.total_cost(), 0.0);
        assert_eq!(result.route.length_miles(), 283.0);
    }

    #[tokio::test]
    async fn unreachable_when_range_is_too_short() {
        let err = optimizer().optimize(&trip(5.0, 10.0, 5.0)).await.unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::Unreachable(RouteUnreachable::SegmentExceedsRange { .. })
        ));
    }

    #[tokio::test]
    async fn narrow_corridor_finds_nothing_off_route() {
        let stations = vec![station(1, -97.5, 35.5, 1.0)];
        let optimizer = RouteOptimizer::new(
            StaticRouteProvider::new(route()),
            InMemoryStations::from_stations(stations),
            RefuelPlanner::new(PlannerConfig::default().with_corridor_miles(5.0)),
        );

        let result = optimizer.optimize(&trip(50.0, 10.0, 50.0)).await.unwrap();
        assert!(result.stations.is_empty());
    }

    #[test]
    fn projection_orders_by_position_then_id() {
        let stations = vec![
            station(9, -97.0, 35.0, 3.0),
            station(2, -99.0, 35.0, 3.0),
            station(7, -97.0, 35.0, 3.0),
        ];
        let projected = project_stations(&route(), &stations, WebMercator);

        let ids: Vec<_> = projected.iter().map(|p| p.station_id).collect();
        assert_eq!(ids, vec![StationId(2), StationId(7), StationId(9)]);
        assert!((projected[0].position - 56.6).abs() < 1e-6);
    }
}
