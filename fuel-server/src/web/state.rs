//! Application state for the web layer.

use std::sync::Arc;

use crate::optimize::RouteOptimizer;

/// Shared application state.
///
/// Generic over the route provider and station store so tests can run the
/// real handlers against fixed data.
pub struct AppState<R, S> {
    /// Trip optimizer
    pub optimizer: Arc<RouteOptimizer<R, S>>,
}

impl<R, S> AppState<R, S> {
    /// Create a new app state.
    pub fn new(optimizer: RouteOptimizer<R, S>) -> Self {
        Self {
            optimizer: Arc::new(optimizer),
        }
    }
}

// Manual impl: derive would require `R: Clone, S: Clone`.
impl<R, S> Clone for AppState<R, S> {
    fn clone(&self) -> Self {
        Self {
            optimizer: Arc::clone(&self.optimizer),
        }
    }
}
