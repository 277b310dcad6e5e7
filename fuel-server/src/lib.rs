//! Fuel route planner server.
//!
//! Given a trip and a vehicle, finds where to buy fuel along the driving
//! route so the trip is feasible and cheap.

pub mod cache;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod optimize;
pub mod planner;
pub mod routing;
pub mod stations;
pub mod web;
