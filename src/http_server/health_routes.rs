//! Health Routes
//!
//! Liveness plus a store ping.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::store::Database;

use super::crud_routes::method_not_allowed;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Create the `/health` route
pub fn health_routes(db: Database) -> Router {
    Router::new()
        .route("/health", get(health_handler).fallback(method_not_allowed))
        .with_state(db)
}

/// 200 when the store answers within the round-trip timeout, 503 otherwise
async fn health_handler(State(db): State<Database>) -> impl IntoResponse {
    let reachable = matches!(
        tokio::time::timeout(db.round_trip_timeout(), db.ping()).await,
        Ok(Ok(()))
    );

    let (status, response) = if reachable {
        (
            StatusCode::OK,
            HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                database: "ok",
            },
        )
    } else {
        tracing::warn!("health check could not reach the database");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthResponse {
                status: "degraded",
                version: env!("CARGO_PKG_VERSION"),
                database: "unreachable",
            },
        )
    };

    (status, Json(response))
}
