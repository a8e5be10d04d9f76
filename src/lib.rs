//! Shared library for the `iot-sensor-api` backend services.
//!
//! This crate backs two read-only HTTP services over the IoT sensor
//! database, each built as its own binary so they run as independent
//! processes on their own ports:
//! - `maintenance-log-service` – serves maintenance log rows, optionally
//!   filtered by sensor, newest first (`GET /sensor-maintenance`)
//! - `sensor-status-service` – serves a computed status summary per sensor,
//!   joining sensor, location, and latest-maintenance data
//!   (`GET /api/sensors`)
//!
//! Both binaries share the same startup sequence, provided here:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Establishing a PostgreSQL connection pool
//! - Mounting the service's routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `DATABASE_URL` (**required**) – PostgreSQL connection string
//! - `DB_POOL_MAX` (optional) – maximum number of DB connections (default: 5)
//! - `MAINTENANCE_LOG_PORT` (optional) – maintenance log service port (default: 5000)
//! - `SENSOR_STATUS_PORT` (optional) – sensor status service port (default: 5001)
//! - `LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! This crate follows the Explicit Module Boundary Pattern (EMBP) by
//! delegating configuration parsing to `config`, row shaping to `models`,
//! and route registration to `routes`.
use std::{env, io::IsTerminal, net::SocketAddr};

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use anyhow::Result;

pub mod config;
pub mod models;
pub mod routes;

pub use config::Config;

// Re-exported at the crate root so consumers of the response types do not
// need knowledge of the module tree, only of the crate root. That way
// refactoring the modules stays local to this crate.
pub use models::{SensorStatus, SensorStatusRow, Status};

// ---

/// Establish the PostgreSQL connection pool for a service.
///
/// The pool is bounded by `cfg.db_pool_max`; each request borrows one
/// connection for the duration of its query and returns it on every exit
/// path when the guard drops. Connection failure at startup is fatal and
/// reported with the (password-masked) target URL.
pub async fn connect_pool(cfg: &Config) -> Result<PgPool> {
    // ---
    tracing::info!("Attempting to connect to database: {}", cfg.masked_db_url());

    let pool = PgPoolOptions::new()
        .max_connections(cfg.db_pool_max)
        .connect(&cfg.db_url)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to connect to database '{}': {}",
                cfg.masked_db_url(),
                e
            )
        })?;

    tracing::info!("Successfully connected to database");
    Ok(pool)
}

/// Bind the listener and serve `app` on the given port until the process
/// is terminated.
pub async fn serve(app: Router, port: u16) -> Result<()> {
    // ---
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by the `LOG_LEVEL` env var, with `RUST_LOG`
///   taking precedence when set
///
/// This should be called once at service startup before any logging
/// or tracing macros are invoked. It installs the subscriber globally
/// for the lifetime of the process.
pub fn init_tracing() {
    // ---
    let span_events = match env::var("SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(format!("{level},sqlx::query=warn"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
