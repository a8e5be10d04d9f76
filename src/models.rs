//! Data models for the sensor dashboard services.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---

/// Raw row produced by the sensor status join query.
///
/// `location` is NULL when the sensor has no shelf or its shelf has no
/// room; `last_maintenance` is NULL when no maintenance was ever logged.
/// Neither is an error.
#[derive(Debug, sqlx::FromRow)]
pub struct SensorStatusRow {
    // ---
    pub id: i32,
    pub name: String,
    pub sensor_type: String,
    pub location: Option<String>,
    pub last_maintenance: Option<DateTime<Utc>>,
}

/// Status label derived from the age of the latest maintenance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Critical,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    Good,
}

impl Status {
    /// Derive the label from the latest maintenance timestamp.
    ///
    /// Never maintained is `Critical`. Otherwise the count of whole days
    /// between `now` and the timestamp decides: strictly more than 30 is
    /// `NeedsAttention`, anything up to and including 30 is `Good`.
    pub fn derive(last_maintenance: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        // ---
        match last_maintenance {
            None => Status::Critical,
            Some(ts) if (now - ts).num_days() > 30 => Status::NeedsAttention,
            Some(_) => Status::Good,
        }
    }
}

/// One entry in the `/api/sensors` response.
#[derive(Debug, Serialize)]
pub struct SensorStatus {
    // ---
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub location: Option<String>,
    /// RFC 3339 timestamp of the latest maintenance, or `"Never"`.
    #[serde(rename = "lastMaintenance")]
    pub last_maintenance: String,
    pub status: Status,
}

impl SensorStatus {
    /// Project a raw joined row into the response shape, computing the
    /// status label relative to `now`.
    ///
    /// `now` is an explicit argument so the projection stays a pure
    /// function that tests can feed synthetic rows and a fixed clock.
    pub fn project(row: SensorStatusRow, now: DateTime<Utc>) -> Self {
        // ---
        let status = Status::derive(row.last_maintenance, now);

        SensorStatus {
            id: row.id,
            name: row.name,
            sensor_type: row.sensor_type,
            location: row.location,
            last_maintenance: row
                .last_maintenance
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_else(|| "Never".to_string()),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn fixed_now() -> DateTime<Utc> {
        // ---
        Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
    }

    fn row_with_maintenance(last: Option<DateTime<Utc>>) -> SensorStatusRow {
        // ---
        SensorStatusRow {
            id: 7,
            name: "Humidity North".to_string(),
            sensor_type: "humidity".to_string(),
            location: Some("Server Room".to_string()),
            last_maintenance: last,
        }
    }

    #[test]
    fn never_maintained_is_critical() {
        // ---
        let now = fixed_now();
        assert_eq!(Status::derive(None, now), Status::Critical);
    }

    #[test]
    fn stale_boundary_is_strictly_greater_than_30_days() {
        // ---
        let now = fixed_now();

        // 31 whole days ago - stale
        let stale = now - Duration::days(31);
        assert_eq!(Status::derive(Some(stale), now), Status::NeedsAttention);

        // Exactly 30 whole days ago - still fine
        let edge = now - Duration::days(30);
        assert_eq!(Status::derive(Some(edge), now), Status::Good);

        // 30 days and 23 hours is still 30 whole days
        let almost = now - (Duration::days(30) + Duration::hours(23));
        assert_eq!(Status::derive(Some(almost), now), Status::Good);

        // Maintained yesterday
        let fresh = now - Duration::days(1);
        assert_eq!(Status::derive(Some(fresh), now), Status::Good);
    }

    #[test]
    fn projection_preserves_sensor_fields() {
        // ---
        let now = fixed_now();
        let ts = now - Duration::days(1);
        let sensor = SensorStatus::project(row_with_maintenance(Some(ts)), now);

        assert_eq!(sensor.id, 7);
        assert_eq!(sensor.name, "Humidity North");
        assert_eq!(sensor.sensor_type, "humidity");
        assert_eq!(sensor.location.as_deref(), Some("Server Room"));
        assert_eq!(sensor.last_maintenance, ts.to_rfc3339());
        assert_eq!(sensor.status, Status::Good);
    }

    #[test]
    fn projection_marks_missing_maintenance_as_never() {
        // ---
        let sensor = SensorStatus::project(row_with_maintenance(None), fixed_now());

        assert_eq!(sensor.last_maintenance, "Never");
        assert_eq!(sensor.status, Status::Critical);
    }

    #[test]
    fn projection_keeps_missing_location_null() {
        // ---
        let mut row = row_with_maintenance(None);
        row.location = None;

        let sensor = SensorStatus::project(row, fixed_now());
        assert_eq!(sensor.location, None);
    }

    #[test]
    fn response_json_uses_dashboard_field_names() {
        // ---
        let now = fixed_now();
        let sensor = SensorStatus::project(row_with_maintenance(Some(now - Duration::days(40))), now);
        let json = serde_json::to_value(&sensor).unwrap();

        // The browser front end consumes exactly these keys.
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Humidity North");
        assert_eq!(json["type"], "humidity");
        assert_eq!(json["location"], "Server Room");
        assert!(json["lastMaintenance"].is_string());
        assert_eq!(json["status"], "Needs Attention");
    }

    #[test]
    fn status_labels_serialize_verbatim() {
        // ---
        assert_eq!(serde_json::to_value(Status::Critical).unwrap(), "Critical");
        assert_eq!(
            serde_json::to_value(Status::NeedsAttention).unwrap(),
            "Needs Attention"
        );
        assert_eq!(serde_json::to_value(Status::Good).unwrap(), "Good");
    }
}
