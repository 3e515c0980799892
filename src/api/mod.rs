//! HTTP endpoints.
//!
//! Axum-based surface with two faces: the server-rendered dashboard at `/`
//! and a small JSON API under `/api/` for the same computed data.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Match data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::DataUnavailable(_) => (StatusCode::BAD_GATEWAY, "DATA_UNAVAILABLE"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = match state.config.server.cors_origin.as_str() {
        "*" => CorsLayer::new().allow_origin(Any).allow_methods(Any),
        origin => {
            let origin = origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("*"));
            CorsLayer::new().allow_origin(origin).allow_methods(Any)
        }
    };

    Router::new()
        .route("/", get(routes::pages::dashboard))
        .route("/api/standings", get(routes::standings::get_standings))
        .route("/api/roster", get(routes::standings::get_roster))
        .route("/api/matches", get(routes::matches::get_matches))
        .route("/health", get(routes::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
