// URL threat analysis pipeline
// Fixed-order chain: whitelist, blacklist, typosquatting, homograph, patterns, default-allow.
// The first stage that decides wins; later stages never run.

use tracing::{debug, info};

use crate::models::{
    AnalysisSource, ScamDomainEntry, ScamType, ThreatLevel, TrustedDomainSet, UrlAnalysisResult,
};
use crate::utils::domain_extractor::extract_domain;
use crate::utils::reference_data::ReferenceData;
use crate::utils::threat_patterns::{
    detect_homograph, detect_suspicious_patterns, detect_typosquatting, find_in_blacklist,
    is_in_whitelist,
};

// =============================================================================
// EDUCATIONAL TIPS
// =============================================================================

const TIP_TYPOSQUATTING_LISTED: &str = "Typosquatting is when scammers register domains with small typos to trick users. Always check the domain letter by letter!";
const TIP_HOMOGRAPH_LISTED: &str = "Homograph attacks use Unicode characters that LOOK identical but are different. Your browser may show them exactly like the real site!";
const TIP_REPORTED_SCAM: &str = "This site was reported as a scam by the community. Never share your private keys or passwords!";
const TIP_TYPOSQUATTING_DETECTED: &str = "Typosquatting is when scammers register domains with small typos (e.g. binanse.com vs binance.com). Always check the full domain!";
const TIP_HOMOGRAPH_DETECTED: &str = "This domain uses Unicode characters that LOOK like normal letters but are different. Widely used in phishing!";
const TIP_TOO_GOOD_TO_BE_TRUE: &str = "Be wary of promises of easy gains or guaranteed profits. If it looks too good to be true, it is probably a scam!";

// =============================================================================
// ANALYZER
// =============================================================================

/// Classifies outbound links as safe or unsafe.
///
/// Holds only immutable reference data, so a single instance can be shared
/// across any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct UrlThreatAnalyzer {
    data: ReferenceData,
}

impl UrlThreatAnalyzer {
    pub fn new(data: ReferenceData) -> Self {
        Self { data }
    }

    pub fn trusted_domains(&self) -> &TrustedDomainSet {
        &self.data.trusted
    }

    pub fn scam_domains(&self) -> &[ScamDomainEntry] {
        &self.data.scam_domains
    }

    /// Analyze a full URL or bare domain. Never fails.
    pub fn analyze(&self, url: &str) -> UrlAnalysisResult {
        let domain = extract_domain(url);
        let result = self.classify(&domain);

        debug!(domain = %domain, source = ?result.source, safe = result.safe, "URL analyzed");
        if let Some(level) = result.level {
            info!(domain = %domain, level = ?level, source = ?result.source, "Unsafe URL detected");
        }

        result
    }

    fn classify(&self, domain: &str) -> UrlAnalysisResult {
        // 1. Whitelist is authoritative
        if is_in_whitelist(domain, &self.data.trusted) {
            return UrlAnalysisResult::safe("domain verified and trusted", AnalysisSource::Whitelist);
        }

        // 2. Known scam domains
        if let Some(entry) = find_in_blacklist(domain, &self.data.scam_domains) {
            return blacklisted(entry);
        }

        // 3. Typosquatting
        if let Some(hit) = detect_typosquatting(domain, &self.data.trusted) {
            return UrlAnalysisResult::unsafe_verdict(
                ThreatLevel::Critical,
                vec![
                    format!("possible typosquatting of '{}'", hit.legitimate),
                    format!("edit distance: {}", hit.distance),
                ],
                TIP_TYPOSQUATTING_DETECTED,
                AnalysisSource::Pattern,
            )
            .with_similar_domain(Some(hit.legitimate));
        }

        // 4. Homograph characters
        let homograph = detect_homograph(domain);
        if homograph.has_homograph {
            let chars: Vec<String> = homograph
                .suspicious_chars
                .iter()
                .map(char::to_string)
                .collect();
            return UrlAnalysisResult::unsafe_verdict(
                ThreatLevel::Critical,
                vec![
                    "homograph attack detected".to_string(),
                    format!("suspicious characters: {}", chars.join(", ")),
                ],
                TIP_HOMOGRAPH_DETECTED,
                AnalysisSource::Pattern,
            );
        }

        // 5. Heuristic patterns
        let patterns = detect_suspicious_patterns(domain);
        if patterns.is_suspicious {
            return UrlAnalysisResult::unsafe_verdict(
                ThreatLevel::Warning,
                patterns.reasons,
                TIP_TOO_GOOD_TO_BE_TRUE,
                AnalysisSource::Pattern,
            );
        }

        // 6. Not known-bad; this is not a verification
        UrlAnalysisResult::safe(
            "no threats detected against known patterns",
            AnalysisSource::Unknown,
        )
    }
}

fn blacklisted(entry: &ScamDomainEntry) -> UrlAnalysisResult {
    let mut reasons = vec![format!("domain known as {}", entry.scam_type)];
    if let Some(legitimate) = &entry.legitimate {
        reasons.push(format!("imitates the legitimate site: {}", legitimate));
    }

    let tip = match entry.scam_type {
        ScamType::Typosquatting => TIP_TYPOSQUATTING_LISTED,
        ScamType::Homograph => TIP_HOMOGRAPH_LISTED,
        _ => TIP_REPORTED_SCAM,
    };

    UrlAnalysisResult::unsafe_verdict(ThreatLevel::Critical, reasons, tip, AnalysisSource::Blacklist)
        .with_similar_domain(entry.legitimate.clone())
}
