//! Greedy, range-constrained refuel planning.
//!
//! The planner walks the route once, left to right. At each station it
//! looks ahead for the nearest strictly cheaper station within a full
//! tank's range:
//!
//! - if there is one, it buys just enough fuel to get there;
//! - otherwise it fills up, but never beyond what the rest of the route needs.
//!
//! This is a heuristic. It does not guarantee the cheapest possible plan.

use crate::domain::{ProjectedStation, VehicleProfile};

use super::config::PlannerConfig;
use super::plan::{RefuelPlan, Stop};
use super::waypoint::{Waypoint, build_waypoints};

/// Purchases at or below this many gallons are too small to report as stops.
pub const MIN_PURCHASE_GALLONS: f64 = 1e-6;

/// The vehicle cannot complete the route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteUnreachable {
    /// The gap between two consecutive waypoints is longer than a full tank.
    #[error(
        "segment exceeds maximum vehicle range: {leg:.2} mi from mile {from:.2} (range {max_range:.2} mi)"
    )]
    SegmentExceedsRange { from: f64, leg: f64, max_range: f64 },

    /// Not enough fuel on board for the next leg.
    #[error(
        "insufficient fuel for next leg at mile {at:.2}: need {needed:.2} gal, have {available:.2} gal"
    )]
    InsufficientFuel {
        at: f64,
        needed: f64,
        available: f64,
    },
}

/// Refuel planner.
///
/// Stateless apart from its configuration; one planner can serve any
/// number of plans concurrently.
#[derive(Debug, Clone, Default)]
pub struct RefuelPlanner {
    config: PlannerConfig,
}

impl RefuelPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan purchases for a route of `total_distance` miles.
    ///
    /// `stations` need not be sorted. Stations outside the route are ignored.
    /// Either the whole plan succeeds or no plan is returned.
    pub fn plan(
        &self,
        stations: &[ProjectedStation],
        total_distance: f64,
        vehicle: &VehicleProfile,
    ) -> Result<RefuelPlan, RouteUnreachable> {
        let waypoints = build_waypoints(stations, total_distance);

        let mpg = vehicle.mpg();
        let max_range = vehicle.max_range();

        let mut position = 0.0;
        let mut fuel = vehicle.start_fuel();
        let mut stops = Vec::new();

        for (i, waypoint) in waypoints.iter().enumerate() {
            let leg = waypoint.position() - position;
            if leg > max_range {
                return Err(RouteUnreachable::SegmentExceedsRange {
                    from: position,
                    leg,
                    max_range,
                });
            }

            let needed = leg / mpg;
            if fuel + self.config.fuel_tolerance < needed {
                return Err(RouteUnreachable::InsufficientFuel {
                    at: position,
                    needed,
                    available: fuel,
                });
            }

            fuel = (fuel - needed).max(0.0);
            position = waypoint.position();

            let Waypoint::Station(station) = waypoint else {
                break;
            };

            let to_buy = match cheaper_target(&waypoints[i + 1..], station, max_range) {
                Some(target) => {
                    let to_reach = (target.position - station.position) / mpg;
                    (to_reach - fuel).max(0.0)
                }
                None => {
                    let to_finish = (total_distance - position) / mpg;
                    (vehicle.tank_capacity() - fuel)
                        .min(to_finish - fuel)
                        .max(0.0)
                }
            };

            if to_buy > MIN_PURCHASE_GALLONS {
                stops.push(Stop {
                    station_id: station.station_id,
                    position: station.position,
                    price: station.price,
                    quantity: to_buy,
                    cost: to_buy * station.price,
                });
            }
            fuel += to_buy;
        }

        Ok(RefuelPlan::new(stops))
    }
}

/// The nearest station ahead that is strictly cheaper than `current` and
/// within one tank of it. The search stops at the destination.
fn cheaper_target<'a>(
    ahead: &[Waypoint<'a>],
    current: &ProjectedStation,
    max_range: f64,
) -> Option<&'a ProjectedStation> {
    ahead
        .iter()
        .map_while(|w| match w {
            Waypoint::Station(s) => Some(*s),
            Waypoint::Destination { .. } => None,
        })
        .find(|s| s.price < current.price && s.position - current.position <= max_range)
}
