//! Vehicle constraints used by the refuel planner.

use super::error::DomainError;

/// Tank capacity, fuel economy and starting fuel of a vehicle.
///
/// Guarantees: all values finite, capacity and economy strictly positive,
/// `0 <= start_fuel <= tank_capacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleProfile {
    tank_capacity: f64,
    mpg: f64,
    start_fuel: f64,
}

impl VehicleProfile {
    /// Validate and build a profile. Quantities are in gallons and miles per gallon.
    pub fn new(tank_capacity: f64, mpg: f64, start_fuel: f64) -> Result<Self, DomainError> {
        if !(tank_capacity.is_finite() && mpg.is_finite() && start_fuel.is_finite()) {
            return Err(DomainError::InvalidVehicle("values must be finite"));
        }
        if tank_capacity <= 0.0 {
            return Err(DomainError::InvalidVehicle("tank_capacity must be positive"));
        }
        if mpg <= 0.0 {
            return Err(DomainError::InvalidVehicle("mpg must be positive"));
        }
        if start_fuel < 0.0 {
            return Err(DomainError::InvalidVehicle("start_fuel must not be negative"));
        }
        if start_fuel > tank_capacity {
            return Err(DomainError::InvalidVehicle(
                "start_fuel cannot exceed tank_capacity",
            ));
        }
        Ok(Self {
            tank_capacity,
            mpg,
            start_fuel,
        })
    }

    pub fn tank_capacity(&self) -> f64 {
        self.tank_capacity
    }

    pub fn mpg(&self) -> f64 {
        self.mpg
    }

    pub fn start_fuel(&self) -> f64 {
        self.start_fuel
    }

    /// Distance coverable on a full tank.
    pub fn max_range(&self) -> f64 {
        self.tank_capacity * self.mpg
    }
}
