use crate::application::resolve_distance::dto::DistanceReport;
use crate::domain::distance::value_objects::Pincode;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// `GET /api/distance?from=<pincode>&to=<pincode>`
///
/// Invalid parameters answer 400 with the response-model shape carrying the
/// failure message; they never reach the engine. Everything else is a 200 —
/// the engine always finds an answer short of a store outage.
pub async fn get_distance(
    State(state): State<AppState>,
    Query(params): Query<DistanceQuery>,
) -> Response {
    let (from, to) = match validate_pair(&params) {
        Ok(pair) => pair,
        Err(rejection) => return (StatusCode::BAD_REQUEST, Json(rejection)).into_response(),
    };

    info!(
        "Fetching distance from {} to {}",
        from.as_str(),
        to.as_str()
    );

    match state.resolver.execute(&from, &to).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

fn validate_pair(params: &DistanceQuery) -> Result<(Pincode, Pincode), DistanceReport> {
    let from = params.from.as_deref().map(str::trim).unwrap_or("");
    let to = params.to.as_deref().map(str::trim).unwrap_or("");

    if from.is_empty() || to.is_empty() {
        return Err(DistanceReport::rejected(
            from,
            to,
            "Both 'from' and 'to' pincodes are required",
        ));
    }

    let from_pincode = Pincode::new(from.to_string())
        .map_err(|_| DistanceReport::rejected(from, to, format!("Invalid pincode: {from}")))?;
    let to_pincode = Pincode::new(to.to_string())
        .map_err(|_| DistanceReport::rejected(from, to, format!("Invalid pincode: {to}")))?;

    Ok((from_pincode, to_pincode))
}
