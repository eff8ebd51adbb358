// Check-URL API endpoint
// Called by the article link interceptor before opening an outbound link

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};
use validator::Validate;

use crate::{
    app::AppState,
    models::{CheckUrlRequest, CheckUrlResponse},
    utils::service_error::ServiceError,
};

// =============================================================================
// CHECK-URL HANDLER
// =============================================================================

/// Classify an outbound link before the user follows it
/// POST /api/check-url
pub async fn check_url(
    State(state): State<AppState>,
    payload: Result<Json<CheckUrlRequest>, JsonRejection>,
) -> Result<Json<CheckUrlResponse>, ServiceError> {
    let Json(mut request) = payload.map_err(|rejection| {
        warn!("Rejected check-url payload: {}", rejection.body_text());
        ServiceError::from(rejection)
    })?;

    // An empty domain cannot be analyzed; reject instead of reporting it safe
    request.url = request.url.trim().to_string();
    if let Err(e) = request.validate() {
        warn!("Invalid check-url request: {}", e);
        return Err(e.into());
    }

    let max = state.config.max_url_length;
    let current = request.url.chars().count();
    if current > max {
        warn!(length = current, max, "check-url request exceeds maximum URL length");
        return Err(ServiceError::UrlTooLong { max, current });
    }

    let response = state.check_url_service.check(&request.url).await;

    if let Some(threat) = &response.threat {
        info!(
            url = %request.url,
            level = ?threat.level,
            source = ?threat.source,
            cached = response.cached,
            "Outbound link flagged"
        );
    }

    Ok(Json(response))
}
