//! OpenRouteService HTTP client.
//!
//! Requests driving directions in GeoJSON form so the route geometry
//! arrives as plain `[lon, lat]` positions.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::{GeoPoint, RoutePath};

use super::RouteProvider;
use super::error::RoutingError;
use super::types::{DirectionsRequest, FeatureCollection};

/// Default base URL for OpenRouteService.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default routing profile.
const DEFAULT_PROFILE: &str = "driving-car";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the OpenRouteService client.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// API key, sent in the `Authorization` header
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Routing profile, e.g. `driving-car` or `driving-hgv`
    pub profile: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OrsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the routing profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenRouteService directions client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    url: String,
    semaphore: Arc<Semaphore>,
}

impl OrsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OrsConfig) -> Result<Self, RoutingError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| RoutingError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert(AUTHORIZATION, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: format!(
                "{}/v2/directions/{}/geojson",
                config.base_url.trim_end_matches('/'),
                config.profile
            ),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Fetch the driving route between two points.
    pub async fn directions(&self, start: GeoPoint, end: GeoPoint) -> Result<RoutePath, RoutingError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutingError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        tracing::debug!(%start, %end, "requesting directions");

        let response = self
            .http
            .post(&self.url)
            .json(&DirectionsRequest::new(start, end))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RoutingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let collection: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: format!("{e} (body: {})", body.chars().take(200).collect::<String>()),
            })?;

        collection.into_route_path()
    }
}

impl RouteProvider for OrsClient {
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RoutePath, RoutingError> {
        self.directions(start, end).await
    }
}
