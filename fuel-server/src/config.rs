//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::routing::OrsConfig;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable is set but its value is unusable
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Where routes come from.
#[derive(Debug, Clone)]
pub enum RouteSource {
    /// Live OpenRouteService API.
    OpenRouteService(OrsConfig),
    /// A saved GeoJSON directions response, served for every request.
    Fixture(PathBuf),
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub route_source: RouteSource,
    pub stations_csv: PathBuf,
    pub corridor_miles: f64,
    pub route_cache: CacheConfig,
    pub station_reload_interval: Duration,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Does not read `.env` files; the caller decides whether to.
    pub fn from_env() -> Result<Self, ConfigError> {
        build_config(|key| std::env::var(key))
    }
}

/// Build configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain map.
pub fn build_config<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let raw = |var: &str, default: &str| (var.to_string(), or_default(var, default));

    let bind_addr: SocketAddr = parse_value(raw("BIND_ADDR", "127.0.0.1:3000"))?;
    let log_level = or_default("LOG_LEVEL", "info");
    let stations_csv = PathBuf::from(or_default("STATIONS_CSV", "data/fuel-prices-enriched.csv"));

    let corridor_miles: f64 = parse_value(raw("CORRIDOR_MILES", "20"))?;
    if !(corridor_miles.is_finite() && corridor_miles > 0.0) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CORRIDOR_MILES".to_string(),
            reason: "must be a positive number".to_string(),
        });
    }

    let route_cache = CacheConfig {
        ttl: Duration::from_secs(parse_value(raw("ROUTE_CACHE_TTL_SECS", "86400"))?),
        max_capacity: parse_value(raw("ROUTE_CACHE_CAPACITY", "10000"))?,
    };

    let station_reload_secs: u64 = parse_value(raw("STATION_RELOAD_SECS", "86400"))?;
    if station_reload_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STATION_RELOAD_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let route_source = match lookup("ROUTE_FIXTURE") {
        Ok(path) if !path.is_empty() => RouteSource::Fixture(PathBuf::from(path)),
        _ => {
            let api_key = lookup("ORS_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar("ORS_API_KEY".to_string()))?;
            let timeout_secs: u64 = parse_value(raw("ORS_TIMEOUT_SECS", "10"))?;

            RouteSource::OpenRouteService(
                OrsConfig::new(api_key)
                    .with_base_url(or_default("ORS_BASE_URL", "https://api.openrouteservice.org"))
                    .with_timeout(timeout_secs),
            )
        }
    };

    Ok(ServerConfig {
        bind_addr,
        log_level,
        route_source,
        stations_csv,
        corridor_miles,
        route_cache,
        station_reload_interval: Duration::from_secs(station_reload_secs),
    })
}

fn parse_value<T>((var, raw): (String, String)) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var,
            reason: e.to_string(),
        })
}
