// Check-URL API request/response models
// Shape consumed by the link interceptor in article pages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::analysis::{AnalysisSource, ThreatLevel, UrlAnalysisResult};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckUrlRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Threat details shown in the warning interstitial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatDetails {
    pub level: ThreatLevel,
    pub reasons: Vec<String>,
    pub educational_tip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_legit_domain: Option<String>,
    pub source: AnalysisSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUrlResponse {
    pub safe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<ThreatDetails>,
    pub cached: bool,
    pub checked_at: DateTime<Utc>,
}

impl CheckUrlResponse {
    pub fn from_analysis(result: UrlAnalysisResult, checked_at: DateTime<Utc>) -> Self {
        let threat = match (result.safe, result.level) {
            (false, Some(level)) => Some(ThreatDetails {
                level,
                reasons: result.reasons,
                educational_tip: result.educational_tip.unwrap_or_default(),
                similar_legit_domain: result.similar_legit_domain,
                source: result.source,
            }),
            _ => None,
        };

        Self {
            safe: result.safe,
            threat,
            cached: false,
            checked_at,
        }
    }
}
