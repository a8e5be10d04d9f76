//! Maintenance log endpoint for the maintenance-log service.
//!
//! `GET /sensor-maintenance` returns maintenance records newest first,
//! optionally restricted to one sensor via the `sensor_id` query parameter.
//! Records are passed through verbatim: whatever columns the external
//! system stores come back as-is in the `data` array.

use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use tracing::{error, info};

// ---

pub fn router() -> Router<PgPool> {
    // ---
    Router::new().route("/sensor-maintenance", get(handler))
}

/// Query parameters for the maintenance log listing.
#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    /// Optional sensor identifier; absent means all sensors.
    sensor_id: Option<String>,
}

/// Success envelope: `{"status":"success","data":[...]}`.
#[derive(Serialize)]
struct LogsResponse {
    status: &'static str,
    data: Vec<Value>,
}

/// Failure envelope: `{"status":"error","message":"..."}`.
///
/// The raw database error text is included, matching what the dashboard
/// log viewer expects to display.
#[derive(Serialize)]
struct LogsError {
    status: &'static str,
    message: String,
}

async fn handler(
    Query(params): Query<LogsQuery>,
    State(pool): State<PgPool>,
) -> impl IntoResponse {
    // ---
    info!(
        "GET /sensor-maintenance - sensor_id={:?}",
        params.sensor_id
    );

    match fetch_logs(&pool, params.sensor_id.as_deref()).await {
        Ok(data) => {
            info!("Returning {} maintenance records", data.len());
            (
                StatusCode::OK,
                Json(LogsResponse {
                    status: "success",
                    data,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Maintenance log query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LogsError {
                    status: "error",
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

// ---

/// Fetch maintenance records, newest first, optionally filtered by sensor.
///
/// Each row is serialized to a JSON object inside the query so the record
/// schema stays pass-through; only the filter and sort columns are named.
/// The filter compares the id column textually, so a malformed identifier
/// matches zero rows instead of raising a distinct error.
async fn fetch_logs(pool: &PgPool, sensor_id: Option<&str>) -> Result<Vec<Value>, sqlx::Error> {
    // ---
    match sensor_id {
        Some(id) => {
            sqlx::query_scalar(
                r#"
                SELECT to_jsonb(sm)
                FROM "sensorMaintenance" sm
                WHERE sm.sensor_id::text = $1
                ORDER BY sm."timestamp" DESC
                "#,
            )
            .bind(id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_scalar(
                r#"
                SELECT to_jsonb(sm)
                FROM "sensorMaintenance" sm
                ORDER BY sm."timestamp" DESC
                "#,
            )
            .fetch_all(pool)
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        // ---
        let body = LogsResponse {
            status: "success",
            data: vec![json!({"id": 1, "sensor_id": 7, "technician": "amara"})],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": "success",
                "data": [{"id": 1, "sensor_id": 7, "technician": "amara"}],
            })
        );
    }

    #[test]
    fn empty_result_is_still_success() {
        // ---
        let body = LogsResponse {
            status: "success",
            data: vec![],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"status": "success", "data": []})
        );
    }

    #[test]
    fn error_envelope_shape() {
        // ---
        let body = LogsError {
            status: "error",
            message: "pool timed out".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"status": "error", "message": "pool timed out"})
        );
    }
}
