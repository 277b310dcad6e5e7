//! Routing provider error types.

use crate::domain::DomainError;

/// Errors from fetching a route.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check ORS_API_KEY")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by routing provider")]
    RateLimited,

    /// Provider returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The provider answered but had no usable route
    #[error("no route found between the given points")]
    NoRoute,

    /// The route contained coordinates outside the valid range
    #[error("invalid route geometry: {0}")]
    InvalidGeometry(#[from] DomainError),

    /// A route fixture could not be loaded
    #[error("route fixture error: {message}")]
    Fixture { message: String },
}
