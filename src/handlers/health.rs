// Health check endpoint

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let analyzer = &state.analyzer;

    Json(json!({
        "status": "healthy",
        "service": "link-guard-core",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "components": {
            "reference_data": {
                "trusted_domains": analyzer.trusted_domains().len(),
                "scam_domains": analyzer.scam_domains().len()
            },
            "check_url_cache": {
                "entries": state.check_url_service.cached_entries().await
            }
        }
    }))
}
