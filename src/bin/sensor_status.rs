//! Entry point for the sensor-status service.
//!
//! Serves `GET /api/sensors`: a computed status summary for every sensor in
//! the IoT sensor database, joining shelf/room location and the latest
//! maintenance timestamp. Listens on `SENSOR_STATUS_PORT` (default: 5001).

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

    let app = routes::sensor_status_router(pool);
    serve(app, cfg.sensor_status_port).await
}
