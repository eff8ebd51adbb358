// Library exports for the link guard backend
// Outbound link threat analysis plus the HTTP API that serves it

pub mod app;
pub mod app_config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use app::AppState;
pub use app_config::{AppConfig, CONFIG};
pub use models::{
    AnalysisSource, CheckUrlResponse, ScamDomainEntry, ScamType, ThreatLevel, TrustedDomainSet,
    UrlAnalysisResult,
};
pub use services::{CheckUrlService, UrlThreatAnalyzer};
pub use utils::{extract_domain, levenshtein_distance, ReferenceData};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Build application state from configuration, loading the reference datasets.
/// Missing or broken dataset files fall back to the embedded defaults.
pub fn initialize_app_state(config: AppConfig) -> AppState {
    info!("Loading reference data...");
    let reference_data = ReferenceData::load_or_embedded(
        &config.reference_data.trusted_domains_path,
        &config.reference_data.scam_domains_path,
    );

    AppState::new(config, reference_data)
}

/// Full application router: `/health` and `/api/check-url`.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(handlers::health_routes())
        .nest("/api", handlers::security_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.cors_allowed_origins.iter().any(|o| o == "*");

    // Wildcard is only honoured outside production
    let allow_origin = if has_wildcard && !config.is_production() {
        debug!("CORS: allowing any origin");
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter(|o| o.as_str() != "*")
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        debug!("CORS: allowing {} configured origins", origins.len());
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
