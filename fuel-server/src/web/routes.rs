//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::DomainError;
use crate::optimize::OptimizeError;
use crate::routing::RouteProvider;
use crate::stations::StationRepository;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<R, S>(state: AppState<R, S>) -> Router
where
    R: RouteProvider + 'static,
    S: StationRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/optimize", post(optimize_route::<R, S>))
        .route("/api/optimize/", post(optimize_route::<R, S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan fuel stops for a trip.
async fn optimize_route<R, S>(
    State(state): State<AppState<R, S>>,
    body: Bytes,
) -> Result<Json<OptimizeRouteResponse>, AppError>
where
    R: RouteProvider,
    S: StationRepository,
{
    // Parse JSON manually so malformed bodies get our error shape
    let req: OptimizeRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(body = %String::from_utf8_lossy(&body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let trip = req.validate()?;
    let result = state.optimizer.optimize(&trip).await?;

    Ok(Json(OptimizeRouteResponse::from_optimization(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<OptimizeError> for AppError {
    fn from(e: OptimizeError) -> Self {
        let message = e.to_string();
        match e {
            OptimizeError::Unreachable(_) => AppError::BadRequest { message },
            OptimizeError::Routing(_) => AppError::BadGateway { message },
            OptimizeError::Stations(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
