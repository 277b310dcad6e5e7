//! Route geometry: corridor selection and linear referencing.
//!
//! All distance measurements happen in a planar projection (Web Mercator by
//! default), never in raw degrees. The projection is pluggable through
//! [`PlanarProjection`].

mod corridor;
mod linear_ref;
mod projection;

pub use corridor::{Corridor, filter_stations};
pub use linear_ref::{LinearReferencer, project_point};
pub use projection::{PlanarProjection, WebMercator, planar_distance, planar_length, project_path};

/// Meters per statute mile, as used for corridor radii.
pub const METERS_PER_MILE: f64 = 1609.34;
