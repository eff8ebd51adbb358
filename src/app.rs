// Application state and configuration
use std::sync::Arc;

use crate::{
    app_config::AppConfig,
    services::{CheckUrlService, UrlThreatAnalyzer},
    utils::reference_data::ReferenceData,
};

// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: Arc<UrlThreatAnalyzer>,
    pub check_url_service: Arc<CheckUrlService>,
}

impl AppState {
    pub fn new(config: AppConfig, reference_data: ReferenceData) -> Self {
        let analyzer = Arc::new(UrlThreatAnalyzer::new(reference_data));
        let check_url_service = Arc::new(CheckUrlService::new(
            analyzer.clone(),
            config.check_url.cache_config(),
        ));

        Self {
            config: Arc::new(config),
            analyzer,
            check_url_service,
        }
    }
}
