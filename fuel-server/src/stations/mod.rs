//! Fuel station store.
//!
//! Stations are loaded from the enriched price CSV at startup, held in
//! memory, and reloaded periodically. Queries return the stations inside a
//! route corridor.

mod error;
mod loader;
mod repository;

pub use error::StationError;
pub use loader::{LoadReport, load_stations, parse_stations};
pub use repository::{InMemoryStations, StationRepository};
