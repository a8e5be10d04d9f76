// src/routes/health.rs
//! Health check endpoint shared by both service binaries.
//!
//! Used by container orchestrators and CI pipelines to verify a service is
//! running and able to respond to HTTP requests. Deliberately lightweight:
//! it never touches the database, so it stays green while the data store is
//! down and the data endpoints are returning 500s.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Create a subrouter containing the `/health` route.
///
/// `service` names the binary in the response body so that probes against
/// the two ports are distinguishable. The router is generic over the
/// application state so it merges cleanly with either gateway router.
pub fn router<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // ---
    Router::new().route(
        "/health",
        get(move || async move {
            Json(HealthResponse {
                status: "ok",
                service,
            })
        }),
    )
}
