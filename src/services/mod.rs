// Services module for the link guard backend
// Business logic layer for the application

pub mod check_url;
pub mod url_analyzer;

// Re-export commonly used services
pub use check_url::{CheckUrlCacheConfig, CheckUrlService};
pub use url_analyzer::UrlThreatAnalyzer;
