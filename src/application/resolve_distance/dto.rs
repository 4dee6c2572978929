use crate::domain::distance::entity::PincodeDistance;
use serde::{Deserialize, Serialize};

/// Where a served record originated.
///
/// Cache hits deliberately keep the source the record was stored with — the
/// cache is transparent, so `Cache` only appears if a stored report carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceSource {
    Cache,
    Database,
    ExternalApi,
    Fallback,
}

/// Canonical distance/duration answer for one ordered pincode pair.
///
/// Null fields are omitted from the JSON body, so a rejected request carries
/// only the echoed pincodes and the failure message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceReport {
    pub from_pincode: String,
    pub to_pincode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_in_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_polyline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DistanceSource>,
    pub message: String,
}

impl DistanceReport {
    pub fn from_entity(entity: &PincodeDistance, source: DistanceSource) -> Self {
        Self {
            from_pincode: entity.from_pincode.clone(),
            to_pincode: entity.to_pincode.clone(),
            distance_in_km: Some(entity.distance_in_km),
            distance_text: Some(format!("{:.2} km", entity.distance_in_km)),
            duration_text: Some(entity.duration_text.clone()),
            duration_in_seconds: Some(entity.duration_in_seconds),
            route_polyline: Some(entity.route_overview_polyline.clone()),
            source: Some(source),
            message: "Success".to_string(),
        }
    }

    /// Shape returned for a request that never reached the engine.
    pub fn rejected(from: &str, to: &str, message: impl Into<String>) -> Self {
        Self {
            from_pincode: from.to_string(),
            to_pincode: to.to_string(),
            distance_in_km: None,
            distance_text: None,
            duration_text: None,
            duration_in_seconds: None,
            route_polyline: None,
            source: None,
            message: message.into(),
        }
    }
}
