// Reference datasets for URL threat analysis
// Trusted domains and known scam domains, loaded once at startup

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// TRUSTED DOMAINS
// =============================================================================

/// Known-legitimate domains grouped by purpose.
///
/// Partition order matters: [`TrustedDomainSet::iter`] walks exchanges, wallets,
/// news, official, analytics and defi in that order, and typosquatting detection
/// reports the first trusted domain within the edit budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedDomainSet {
    pub exchanges: Vec<String>,
    pub wallets: Vec<String>,
    pub news: Vec<String>,
    pub official: Vec<String>,
    pub analytics: Vec<String>,
    pub defi: Vec<String>,
}

impl TrustedDomainSet {
    /// All trusted domains in partition order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exchanges
            .iter()
            .chain(&self.wallets)
            .chain(&self.news)
            .chain(&self.official)
            .chain(&self.analytics)
            .chain(&self.defi)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
            + self.wallets.len()
            + self.news.len()
            + self.official.len()
            + self.analytics.len()
            + self.defi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Trim and lower-case every entry, dropping blanks and duplicates inside a partition.
    pub fn normalized(self) -> Self {
        Self {
            exchanges: normalize_partition(self.exchanges),
            wallets: normalize_partition(self.wallets),
            news: normalize_partition(self.news),
            official: normalize_partition(self.official),
            analytics: normalize_partition(self.analytics),
            defi: normalize_partition(self.defi),
        }
    }
}

fn normalize_partition(domains: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    domains
        .into_iter()
        .map(|d| d.trim().to_lowercase())
        .filter(|d| !d.is_empty() && seen.insert(d.clone()))
        .collect()
}

// =============================================================================
// SCAM DOMAINS
// =============================================================================

/// Attack category of a blacklisted domain.
///
/// Unknown categories are kept verbatim so they round-trip through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScamType {
    Typosquatting,
    Homograph,
    ReportedScam,
    Other(String),
}

impl ScamType {
    pub fn as_str(&self) -> &str {
        match self {
            ScamType::Typosquatting => "typosquatting",
            ScamType::Homograph => "homograph",
            ScamType::ReportedScam => "reported-scam",
            ScamType::Other(raw) => raw,
        }
    }
}

impl From<String> for ScamType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "typosquatting" => ScamType::Typosquatting,
            "homograph" => ScamType::Homograph,
            "reported-scam" => ScamType::ReportedScam,
            _ => ScamType::Other(s),
        }
    }
}

impl From<ScamType> for String {
    fn from(t: ScamType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ScamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One known-malicious domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScamDomainEntry {
    pub domain: String,
    #[serde(rename = "type")]
    pub scam_type: ScamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legitimate: Option<String>,
}

/// On-disk shape of the scam domain dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScamDomainList {
    #[serde(default)]
    pub domains: Vec<ScamDomainEntry>,
}

impl ScamDomainList {
    pub fn normalized(self) -> Self {
        let domains = self
            .domains
            .into_iter()
            .map(|entry| ScamDomainEntry {
                domain: entry.domain.trim().to_lowercase(),
                ..entry
            })
            .filter(|entry| !entry.domain.is_empty())
            .collect();
        Self { domains }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_iter_follows_partition_order() {
        let set = TrustedDomainSet {
            exchanges: vec!["binance.com".into()],
            wallets: vec!["metamask.io".into()],
            defi: vec!["uniswap.org".into()],
            ..Default::default()
        };

        let all: Vec<&str> = set.iter().collect();
        assert_eq!(all, vec!["binance.com", "metamask.io", "uniswap.org"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_normalized_drops_duplicates_and_blanks() {
        let set = TrustedDomainSet {
            exchanges: vec![
                " Binance.com ".into(),
                "binance.com".into(),
                "".into(),
                "kraken.com".into(),
            ],
            ..Default::default()
        }
        .normalized();

        assert_eq!(set.exchanges, vec!["binance.com", "kraken.com"]);
    }

    #[test]
    fn test_missing_partitions_deserialize_empty() {
        let set: TrustedDomainSet =
            serde_json::from_str(r#"{"exchanges": ["binance.com"]}"#).unwrap();
        assert_eq!(set.exchanges.len(), 1);
        assert!(set.wallets.is_empty());
    }

    #[test]
    fn test_scam_type_keeps_unknown_values() {
        let entry: ScamDomainEntry =
            serde_json::from_str(r#"{"domain": "x.com", "type": "fake-support"}"#).unwrap();
        assert_eq!(entry.scam_type, ScamType::Other("fake-support".to_string()));
        assert_eq!(entry.legitimate, None);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "fake-support");
        assert!(json.get("legitimate").is_none());
    }

    #[test]
    fn test_scam_type_known_values() {
        assert_eq!(
            ScamType::from("reported-scam".to_string()),
            ScamType::ReportedScam
        );
        assert_eq!(ScamType::Typosquatting.to_string(), "typosquatting");
    }
}
