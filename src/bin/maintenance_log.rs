//! Entry point for the maintenance-log service.
//!
//! Serves `GET /sensor-maintenance`: maintenance log rows from the IoT
//! sensor database, optionally filtered by sensor, newest first. Listens on
//! `MAINTENANCE_LOG_PORT` (default: 5000).

use anyhow::Result;
use dotenvy::dotenv;

use iot_sensor_api::{config, connect_pool, init_tracing, routes, serve};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let pool = connect_pool(&cfg).await?;

    let app = routes::maintenance_log_router(pool);
    serve(app, cfg.maintenance_log_port).await
}
