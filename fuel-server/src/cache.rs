//! Caching layer for route provider responses.
//!
//! Routes between the same two points rarely change and provider calls are
//! slow and rate limited, so successful responses are kept for a day by
//! default. Failures are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{GeoPoint, RoutePath};
use crate::routing::{RouteProvider, RoutingError};

/// Cache key: exact bit patterns of (start lon, start lat, end lon, end lat).
type RouteKey = (u64, u64, u64, u64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

fn route_key(start: GeoPoint, end: GeoPoint) -> RouteKey {
    (
        start.lon().to_bits(),
        start.lat().to_bits(),
        end.lon().to_bits(),
        end.lat().to_bits(),
    )
}

/// Route provider with caching.
///
/// Wraps any [`RouteProvider`] and caches its successful responses.
pub struct CachedRouteProvider<P> {
    provider: P,
    routes: MokaCache<RouteKey, Arc<RoutePath>>,
}

impl<P: RouteProvider> CachedRouteProvider<P> {
    /// Create a new cached provider.
    pub fn new(provider: P, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { provider, routes }
    }

    /// Access the underlying provider for operations that bypass cache.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Number of cached routes, after pending evictions are applied.
    pub async fn cache_entry_count(&self) -> u64 {
        self.routes.run_pending_tasks().await;
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.routes.invalidate_all();
    }
}

impl<P: RouteProvider> RouteProvider for CachedRouteProvider<P> {
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RoutePath, RoutingError> {
        let key = route_key(start, end);

        if let Some(cached) = self.routes.get(&key).await {
            tracing::debug!(%start, %end, "route cache hit");
            return Ok(cached.as_ref().clone());
        }

        tracing::debug!(%start, %end, "route cache miss");
        let route = self.provider.route(start, end).await?;
        self.routes.insert(key, Arc::new(route.clone())).await;

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn pt(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat).unwrap()
    }

    /// Provider that counts calls and optionally fails.
    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingProvider {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RouteProvider for CountingProvider {
        async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RoutePath, RoutingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RoutingError::NoRoute);
            }
            Ok(RoutePath::new(vec![start, end], 10.0).unwrap())
        }
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(86_400));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[test]
    fn key_distinguishes_direction() {
        let a = pt(-75.0, 40.0);
        let b = pt(-76.0, 41.0);
        assert_ne!(route_key(a, b), route_key(b, a));
        assert_eq!(route_key(a, b), route_key(a, b));
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let cached = CachedRouteProvider::new(CountingProvider::new(false), &CacheConfig::default());
        let (a, b) = (pt(-75.0, 40.0), pt(-76.0, 41.0));

        let first = cached.route(a, b).await.unwrap();
        let second = cached.route(a, b).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.provider().calls(), 1);
    }

    #[tokio::test]
    async fn different_endpoints_miss() {
        let cached = CachedRouteProvider::new(CountingProvider::new(false), &CacheConfig::default());

        cached.route(pt(-75.0, 40.0), pt(-76.0, 41.0)).await.unwrap();
        cached.route(pt(-75.0, 40.0), pt(-77.0, 41.0)).await.unwrap();

        assert_eq!(cached.provider().calls(), 2);
        assert_eq!(cached.cache_entry_count().await, 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cached = CachedRouteProvider::new(CountingProvider::new(true), &CacheConfig::default());
        let (a, b) = (pt(-75.0, 40.0), pt(-76.0, 41.0));

        assert!(cached.route(a, b).await.is_err());
        assert!(cached.route(a, b).await.is_err());
        assert_eq!(cached.provider().calls(), 2);
        assert_eq!(cached.cache_entry_count().await, 0);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cached = CachedRouteProvider::new(CountingProvider::new(false), &CacheConfig::default());
        let (a, b) = (pt(-75.0, 40.0), pt(-76.0, 41.0));

        cached.route(a, b).await.unwrap();
        assert_eq!(cached.cache_entry_count().await, 1);

        cached.invalidate_cache();
        assert_eq!(cached.cache_entry_count().await, 0);

        cached.route(a, b).await.unwrap();

        assert_eq!(cached.provider().calls(), 2);
    }
}
