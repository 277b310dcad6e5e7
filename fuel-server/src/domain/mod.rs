//! Domain types for the fuel route planner.
//!
//! This module contains the core domain model types: validated
//! coordinates, stations, routes and vehicle constraints. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod error;
mod geo_point;
mod route;
mod station;
mod vehicle;

pub use error::DomainError;
pub use geo_point::GeoPoint;
pub use route::RoutePath;
pub use station::{ProjectedStation, Station, StationId};
pub use vehicle::VehicleProfile;
