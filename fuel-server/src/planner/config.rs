//! Planning configuration.

use crate::geometry::METERS_PER_MILE;

/// Configuration parameters for refuel planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Radius of the station corridor around the route (miles).
    pub corridor_miles: f64,

    /// Slack (gallons) allowed when checking whether the tank covers a leg.
    /// Absorbs floating point error from buying exactly enough for a leg.
    pub fuel_tolerance: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(corridor_miles: f64, fuel_tolerance: f64) -> Self {
        Self {
            corridor_miles,
            fuel_tolerance,
        }
    }

    /// Set the corridor radius.
    pub fn with_corridor_miles(mut self, miles: f64) -> Self {
        self.corridor_miles = miles;
        self
    }

    /// Returns the corridor radius in meters.
    pub fn corridor_radius_m(&self) -> f64 {
        self.corridor_miles * METERS_PER_MILE
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            corridor_miles: 20.0,
            fuel_tolerance: 1e-9,
        }
    }
}
