//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, GeoPoint, StationId, VehicleProfile};
use crate::optimize::{Optimization, TripRequest};
use crate::planner::{Stop, round2};

/// Request to optimize fuel purchases for a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizeRouteRequest {
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,

    /// Tank capacity in gallons
    pub tank_capacity: f64,

    /// Fuel economy in miles per gallon
    pub mpg: f64,

    /// Fuel on board at the start, in gallons
    pub start_fuel: f64,
}

impl OptimizeRouteRequest {
    /// Validate the request and convert it to a trip.
    pub fn validate(&self) -> Result<TripRequest, DomainError> {
        Ok(TripRequest {
            start: GeoPoint::new(self.start_lon, self.start_lat)?,
            end: GeoPoint::new(self.end_lon, self.end_lat)?,
            vehicle: VehicleProfile::new(self.tank_capacity, self.mpg, self.start_fuel)?,
        })
    }
}

/// Response for a successful optimization.
#[derive(Debug, Serialize)]
pub struct OptimizeRouteResponse {
    /// Route length in miles
    pub total_distance: f64,

    /// Purchases in route order
    pub stops: Vec<StopResult>,

    /// Total spend, rounded to cents
    pub total_cost: f64,

    /// Route geometry as `[lon, lat]` pairs
    pub route_geometry: Vec<[f64; 2]>,
}

/// A fuel stop in the response.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub station_id: StationId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub mile_marker: f64,
    pub price: f64,
    pub quantity: f64,
    pub cost: f64,
}

impl OptimizeRouteResponse {
    pub fn from_optimization(result: &Optimization) -> Self {
        let stops = result
            .plan
            .stops()
            .iter()
            .map(|stop| StopResult::from_stop(stop, result))
            .collect();

        Self {
            total_distance: result.route.length_miles(),
            stops,
            total_cost: round2(result.plan.total_cost()),
            route_geometry: result
                .route
                .points()
                .iter()
                .map(|p| [p.lon(), p.lat()])
                .collect(),
        }
    }
}

impl StopResult {
    fn from_stop(stop: &Stop, result: &Optimization) -> Self {
        let (name, city, state) = result
            .station(stop.station_id)
            .map(|s| (s.name.clone(), s.city.clone(), s.state.clone()))
            .unwrap_or_default();

        Self {
            station_id: stop.station_id,
            name,
            city,
            state,
            mile_marker: stop.rounded_position(),
            price: stop.price,
            quantity: stop.rounded_quantity(),
            cost: stop.rounded_cost(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
