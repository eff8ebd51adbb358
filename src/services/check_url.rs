// Check-URL service: analyzer verdicts for the link interceptor, with a TTL cache
// The analyzer itself never caches; repeated clicks on the same domain hit this cache.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::CheckUrlResponse;
use crate::services::url_analyzer::UrlThreatAnalyzer;
use crate::utils::domain_extractor::extract_domain;

#[derive(Debug, Clone, Copy)]
pub struct CheckUrlCacheConfig {
    pub ttl: Duration,
    pub max_entries: usize,
}

impl Default for CheckUrlCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
            max_entries: 10_000,
        }
    }
}

pub struct CheckUrlService {
    analyzer: Arc<UrlThreatAnalyzer>,
    cache: RwLock<HashMap<String, (CheckUrlResponse, Instant)>>,
    cache_config: CheckUrlCacheConfig,
}

impl CheckUrlService {
    pub fn new(analyzer: Arc<UrlThreatAnalyzer>, cache_config: CheckUrlCacheConfig) -> Self {
        Self {
            analyzer,
            cache: RwLock::new(HashMap::new()),
            cache_config,
        }
    }

    pub async fn check(&self, url: &str) -> CheckUrlResponse {
        let key = extract_domain(url);

        if let Some(cached) = self.get_cached(&key).await {
            debug!(domain = %key, "check-url cache hit");
            return cached;
        }

        let result = self.analyzer.analyze(url);
        let response = CheckUrlResponse::from_analysis(result, Utc::now());

        self.store(key, response.clone()).await;
        response
    }

    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn get_cached(&self, key: &str) -> Option<CheckUrlResponse> {
        if self.cache_config.ttl.is_zero() {
            return None;
        }

        let cache = self.cache.read().await;
        match cache.get(key) {
            Some((response, stored_at)) if stored_at.elapsed() < self.cache_config.ttl => {
                Some(CheckUrlResponse {
                    cached: true,
                    ..response.clone()
                })
            },
            _ => None,
        }
    }

    async fn store(&self, key: String, response: CheckUrlResponse) {
        if self.cache_config.ttl.is_zero() {
            return;
        }

        let mut cache = self.cache.write().await;
        cache.insert(key, (response, Instant::now()));

        // Clean old entries if cache is too large
        if cache.len() > self.cache_config.max_entries {
            let ttl = self.cache_config.ttl;
            cache.retain(|_, (_, stored_at)| stored_at.elapsed() < ttl);

            if cache.len() > self.cache_config.max_entries {
                debug!(entries = cache.len(), "check-url cache full, clearing");
                cache.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThreatLevel;
    use crate::utils::reference_data::ReferenceData;

    fn service(cache_config: CheckUrlCacheConfig) -> CheckUrlService {
        let analyzer = Arc::new(UrlThreatAnalyzer::new(ReferenceData::embedded()));
        CheckUrlService::new(analyzer, cache_config)
    }

    #[tokio::test]
    async fn test_second_check_is_served_from_cache() {
        let service = service(CheckUrlCacheConfig::default());

        let first = service.check("https://binanse.com/login").await;
        assert!(!first.cached);
        assert!(!first.safe);
        assert_eq!(first.threat.as_ref().map(|t| t.level), Some(ThreatLevel::Critical));

        // different URL, same domain
        let second = service.check("binanse.com").await;
        assert!(second.cached);
        assert_eq!(second.checked_at, first.checked_at);
        assert_eq!(second.threat, first.threat);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let service = service(CheckUrlCacheConfig {
            ttl: Duration::ZERO,
            max_entries: 10,
        });

        service.check("binance.com").await;
        let again = service.check("binance.com").await;
        assert!(!again.cached);
        assert_eq!(service.cached_entries().await, 0);
    }

    #[tokio::test]
    async fn test_cache_is_bounded() {
        let service = service(CheckUrlCacheConfig {
            ttl: Duration::from_secs(60),
            max_entries: 2,
        });

        service.check("a.com").await;
        service.check("b.com").await;
        assert_eq!(service.cached_entries().await, 2);

        service.check("c.com").await;
        assert!(service.cached_entries().await <= 2);
    }

    #[tokio::test]
    async fn test_expired_entries_are_recomputed() {
        let service = service(CheckUrlCacheConfig {
            ttl: Duration::from_millis(50),
            max_entries: 10,
        });

        service.check("example.com").await;
        std::thread::sleep(Duration::from_millis(60));

        let again = service.check("example.com").await;
        assert!(!again.cached);
    }
}
