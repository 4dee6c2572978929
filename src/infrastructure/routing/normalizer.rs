//! Converts a routing-provider payload into the canonical route summary.
//!
//! The provider's responses are loosely typed, so every field on the expected
//! path is optional and absence is a tagged error rather than a panic or an
//! exception-driven control flow.

use serde::Deserialize;
use thiserror::Error;

/// Opaque token stored in place of real route geometry. The provider payload
/// is never decoded into a polyline; this placeholder is intentional.
pub const ROUTE_POLYLINE_PLACEHOLDER: &str = "openroute_polyline";

#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("Provider payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Provider payload contains no route features")]
    NoRoutes,
    #[error("Route feature is missing its distance/duration summary")]
    MissingSummary,
}

/// Canonical summary of one provider route: meters and whole seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRoute {
    pub distance_meters: f64,
    pub duration_seconds: i64,
}

#[derive(Debug, Deserialize)]
struct OrsResponse {
    features: Option<Vec<OrsFeature>>,
}

#[derive(Debug, Deserialize)]
struct OrsFeature {
    properties: Option<OrsProperties>,
}

#[derive(Debug, Deserialize)]
struct OrsProperties {
    summary: Option<OrsSummary>,
}

#[derive(Debug, Deserialize)]
struct OrsSummary {
    distance: Option<f64>,
    duration: Option<f64>,
}

/// Extracts the first route feature's summary. The fractional part of the
/// duration is truncated.
pub fn normalize(raw: &str) -> Result<NormalizedRoute, NormalizationError> {
    let payload: OrsResponse = serde_json::from_str(raw)?;

    let feature = payload
        .features
        .and_then(|features| features.into_iter().next())
        .ok_or(NormalizationError::NoRoutes)?;

    let summary = feature
        .properties
        .and_then(|properties| properties.summary)
        .ok_or(NormalizationError::MissingSummary)?;

    match (summary.distance, summary.duration) {
        (Some(distance), Some(duration)) => Ok(NormalizedRoute {
            distance_meters: distance,
            duration_seconds: duration as i64,
        }),
        _ => Err(NormalizationError::MissingSummary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_first_route_summary() {
        let raw = r#"{"features":[{"properties":{"summary":{"distance":12345.0,"duration":600.0}}}]}"#;
        let route = normalize(raw).unwrap();
        assert_eq!(route.distance_meters, 12345.0);
        assert_eq!(route.duration_seconds, 600);
    }

    #[test]
    fn truncates_fractional_durations() {
        let raw = r#"{"features":[{"properties":{"summary":{"distance":1000.0,"duration":59.9}}}]}"#;
        assert_eq!(normalize(raw).unwrap().duration_seconds, 59);
    }

    #[test]
    fn rejects_non_json_payloads() {
        assert!(matches!(
            normalize("<html>service down</html>"),
            Err(NormalizationError::InvalidJson(_))
        ));
    }

    #[test]
    fn rejects_missing_or_empty_feature_lists() {
        assert!(matches!(
            normalize(r#"{"error":"quota exceeded"}"#),
            Err(NormalizationError::NoRoutes)
        ));
        assert!(matches!(
            normalize(r#"{"features":[]}"#),
            Err(NormalizationError::NoRoutes)
        ));
    }

    #[test]
    fn rejects_features_without_a_summary() {
        assert!(matches!(
            normalize(r#"{"features":[{"properties":{}}]}"#),
            Err(NormalizationError::MissingSummary)
        ));
        assert!(matches!(
            normalize(r#"{"features":[{"properties":{"summary":{"distance":1.0}}}]}"#),
            Err(NormalizationError::MissingSummary)
        ));
    }
}
