//! Fuel station types.

use std::fmt;

use serde::Serialize;

use super::geo_point::GeoPoint;

/// Identifier of a fuel station (the OPIS truckstop id).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fuel station with a known position and retail price.
///
/// Station records are reference data: the planner reads them but never
/// modifies them.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub position: GeoPoint,
    /// Retail price per gallon.
    pub price: f64,
}

impl Station {
    /// Create a station with no descriptive fields.
    pub fn new(id: StationId, position: GeoPoint, price: f64) -> Self {
        Self {
            id,
            name: String::new(),
            city: String::new(),
            state: String::new(),
            position,
            price,
        }
    }

    /// Attach name, city and state.
    pub fn with_details(
        mut self,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.city = city.into();
        self.state = state.into();
        self
    }
}

/// A station placed on a specific route by linear referencing.
///
/// Only meaningful for the route it was computed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStation {
    pub station_id: StationId,
    /// Miles from the start of the route.
    pub position: f64,
    pub price: f64,
}

impl ProjectedStation {
    pub fn new(station_id: StationId, position: f64, price: f64) -> Self {
        Self {
            station_id,
            position,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_id_display_and_debug() {
        let id = StationId(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{id:?}"), "StationId(7)");
    }

    #[test]
    fn station_id_serializes_as_number() {
        let json = serde_json::to_string(&StationId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn with_details_sets_fields() {
        let pos = GeoPoint::new(-75.0, 40.0).unwrap();
        let station = Station::new(StationId(1), pos, 3.5).with_details("Pilot", "Easton", "PA");
        assert_eq!(station.name, "Pilot");
        assert_eq!(station.city, "Easton");
        assert_eq!(station.state, "PA");
        assert_eq!(station.price, 3.5);
    }
}
