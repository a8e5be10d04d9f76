//! Route gateways for the two service binaries (EMBP).
//!
//! Each service gets its own router so the binaries stay independent
//! processes; the sibling modules only export subrouters and never see the
//! pool construction or server setup.

use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

mod health;
mod maintenance;
mod sensors;

// ---

/// Router for the maintenance log service.
///
/// CORS is wide open (any origin, no credentials) because the dashboard
/// front end is served from a different origin.
pub fn maintenance_log_router(pool: PgPool) -> Router {
    // ---
    Router::new()
        .merge(maintenance::router())
        .merge(health::router("maintenance-log-service"))
        .layer(CorsLayer::permissive())
        .with_state(pool)
}

/// Router for the sensor status service. Same CORS policy as above.
pub fn sensor_status_router(pool: PgPool) -> Router {
    // ---
    Router::new()
        .merge(sensors::router())
        .merge(health::router("sensor-status-service"))
        .layer(CorsLayer::permissive())
        .with_state(pool)
}
