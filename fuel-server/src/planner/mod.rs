//! Refuel planner.
//!
//! This module implements the core planning algorithm that answers:
//! "Given these stations along my route, where should I buy fuel, and how
//! much, to finish as cheaply as possible?"
//!
//! The algorithm is a single greedy scan over stations ordered by their
//! distance along the route, with the destination as the final waypoint.

mod config;
mod plan;
mod refuel;
mod waypoint;


pub use config::PlannerConfig;
pub use plan::{RefuelPlan, Stop, round2};
pub use refuel::{MIN_PURCHASE_GALLONS, RefuelPlanner, RouteUnreachable};
pub use waypoint::{Waypoint, build_waypoints};
