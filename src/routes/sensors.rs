//! Sensor status endpoint for the sensor-status service.
//!
//! `GET /api/sensors` returns one summary object per sensor: its shelf/room
//! location, the timestamp of its most recent maintenance, and a status
//! label computed from that timestamp's age.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use tracing::{error, info};

use crate::models::{SensorStatus, SensorStatusRow};

// ---

pub fn router() -> Router<PgPool> {
    // ---
    Router::new().route("/api/sensors", get(handler))
}

async fn handler(State(pool): State<PgPool>) -> impl IntoResponse {
    // ---
    info!("GET /api/sensors");

    match fetch_status_rows(&pool).await {
        Ok(rows) => {
            let now = Utc::now();
            let sensors: Vec<SensorStatus> = rows
                .into_iter()
                .map(|row| SensorStatus::project(row, now))
                .collect();

            info!("Returning {} sensor statuses", sensors.len());
            (StatusCode::OK, Json(sensors)).into_response()
        }
        Err(e) => {
            // The raw error stays in the server log; callers only see the
            // generic body.
            error!("Sensor status query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Database error occurred" })),
            )
                .into_response()
        }
    }
}

// ---

/// Fetch the joined status row for every sensor, ordered by sensor id.
///
/// LEFT JOINs keep sensors without a shelf, room, or maintenance history in
/// the result with NULLs; GROUP BY collapses the maintenance join to one
/// row per sensor carrying only the latest timestamp.
async fn fetch_status_rows(pool: &PgPool) -> Result<Vec<SensorStatusRow>, sqlx::Error> {
    // ---
    sqlx::query_as::<_, SensorStatusRow>(
        r#"
        SELECT s.id,
               s.name,
               s."sensorType"        AS sensor_type,
               r.name                AS location,
               MAX(sm."timestamp")   AS last_maintenance
        FROM "Sensors" s
        LEFT JOIN "Shelves" sh ON s.shelve_id = sh.id
        LEFT JOIN "Rooms" r ON sh.room_id = r.id
        LEFT JOIN "sensorMaintenance" sm ON sm.sensor_id = s.id
        GROUP BY s.id, s.name, s."sensorType", r.name
        ORDER BY s.id
        "#,
    )
    .fetch_all(pool)
    .await
}
