// URL analysis result returned to link-warning UIs and API callers
// Field names and enum values are a stable wire contract

use serde::{Deserialize, Serialize};

/// Severity of an unsafe verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Critical,
    Warning,
    Suspicious,
}

/// Which stage of the pipeline decided the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Positively known-good.
    Whitelist,
    /// Known-bad.
    Blacklist,
    /// Flagged by a heuristic.
    Pattern,
    /// Merely not known-bad.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalysisResult {
    pub safe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ThreatLevel>,
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub educational_tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_legit_domain: Option<String>,
    pub source: AnalysisSource,
}

impl UrlAnalysisResult {
    pub fn safe(reason: impl Into<String>, source: AnalysisSource) -> Self {
        Self {
            safe: true,
            level: None,
            reasons: vec![reason.into()],
            educational_tip: None,
            similar_legit_domain: None,
            source,
        }
    }

    pub fn unsafe_verdict(
        level: ThreatLevel,
        reasons: Vec<String>,
        educational_tip: impl Into<String>,
        source: AnalysisSource,
    ) -> Self {
        Self {
            safe: false,
            level: Some(level),
            reasons,
            educational_tip: Some(educational_tip.into()),
            similar_legit_domain: None,
            source,
        }
    }

    pub fn with_similar_domain(mut self, domain: Option<String>) -> Self {
        self.similar_legit_domain = domain;
        self
    }
}
