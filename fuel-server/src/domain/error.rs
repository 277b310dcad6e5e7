//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate is non-finite or outside its valid range
    #[error("invalid {axis}: {value} (must be within [-{limit}, {limit}])")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        limit: f64,
    },

    /// Vehicle parameters are inconsistent or out of range
    #[error("invalid vehicle: {0}")]
    InvalidVehicle(&'static str),

    /// Route data is unusable
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),
}
