//! Web layer for the fuel route planner.
//!
//! Provides the HTTP endpoint for optimizing fuel purchases along a route.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
