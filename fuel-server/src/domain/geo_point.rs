//! Geodetic coordinate type.

use std::fmt;

use super::error::DomainError;

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A WGS84 position as (longitude, latitude) in degrees.
///
/// Both components are finite and within range by construction.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::GeoPoint;
///
/// let denver = GeoPoint::new(-104.99, 39.74).unwrap();
/// assert_eq!(denver.lat(), 39.74);
///
/// assert!(GeoPoint::new(-104.99, 91.0).is_err());
/// assert!(GeoPoint::new(181.0, 0.0).is_err());
/// assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
}

impl GeoPoint {
    /// Create a point, validating both axes.
    pub fn new(lon: f64, lat: f64) -> Result<Self, DomainError> {
        check_axis("longitude", lon, MAX_LONGITUDE)?;
        check_axis("latitude", lat, MAX_LATITUDE)?;
        Ok(Self { lon, lat })
    }

    /// Create a point by clamping each axis into range.
    ///
    /// Non-finite input collapses to zero on that axis.
    pub fn clamped(lon: f64, lat: f64) -> Self {
        let clamp = |v: f64, limit: f64| {
            if v.is_finite() {
                v.clamp(-limit, limit)
            } else {
                0.0
            }
        };
        Self {
            lon: clamp(lon, MAX_LONGITUDE),
            lat: clamp(lat, MAX_LATITUDE),
        }
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

fn check_axis(axis: &'static str, value: f64, limit: f64) -> Result<(), DomainError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::InvalidCoordinate { axis, value, limit })
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}
