use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted distance computation for one ordered pincode pair.
///
/// Rows are inserted once and never updated: whatever was computed first for a
/// pair is served indefinitely. The entity carries no source tag — where the
/// data came from is only known at response time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PincodeDistance {
    pub id: i64,
    pub from_pincode: String,
    pub to_pincode: String,
    pub distance_in_meters: f64,
    pub distance_in_km: f64,
    pub duration_in_seconds: i64,
    pub duration_text: String,
    /// Opaque route token. The provider payload is never decoded into geometry,
    /// so this is always a placeholder, real route or not.
    pub route_overview_polyline: String,
    /// Raw provider response body, or a small synthetic JSON blob on the
    /// fallback path.
    pub full_route_json: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a freshly computed pair. The id and timestamps are
/// assigned by the database.
#[derive(Debug, Clone)]
pub struct NewPincodeDistance {
    pub from_pincode: String,
    pub to_pincode: String,
    pub distance_in_meters: f64,
    pub distance_in_km: f64,
    pub duration_in_seconds: i64,
    pub duration_text: String,
    pub route_overview_polyline: String,
    pub full_route_json: String,
}
