// Reference dataset loading
// Trusted and scam domain lists live in JSON files editable without code changes.
// The default lists are compiled in and used whenever the files cannot be read.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{ScamDomainEntry, ScamDomainList, TrustedDomainSet};

const EMBEDDED_TRUSTED_DOMAINS: &str = include_str!("../../data/trusted-domains.json");
const EMBEDDED_SCAM_DOMAINS: &str = include_str!("../../data/scam-domains.json");

#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable datasets consumed by the analyzer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub trusted: TrustedDomainSet,
    pub scam_domains: Vec<ScamDomainEntry>,
}

impl ReferenceData {
    pub fn new(trusted: TrustedDomainSet, scam_domains: ScamDomainList) -> Self {
        Self {
            trusted: trusted.normalized(),
            scam_domains: scam_domains.normalized().domains,
        }
    }

    /// Load both datasets from JSON files.
    pub fn load(trusted_path: &Path, scam_path: &Path) -> Result<Self, ReferenceDataError> {
        let trusted: TrustedDomainSet = read_json(trusted_path)?;
        let scams: ScamDomainList = read_json(scam_path)?;

        let data = Self::new(trusted, scams);
        info!(
            trusted = data.trusted.len(),
            scam = data.scam_domains.len(),
            "Loaded reference data from {} and {}",
            trusted_path.display(),
            scam_path.display()
        );
        Ok(data)
    }

    /// The default datasets shipped with the binary.
    pub fn embedded() -> Self {
        // Validity of the embedded files is covered by tests
        let trusted = serde_json::from_str(EMBEDDED_TRUSTED_DOMAINS).unwrap_or_default();
        let scams = serde_json::from_str(EMBEDDED_SCAM_DOMAINS).unwrap_or_default();
        Self::new(trusted, scams)
    }

    /// Load from the given files, falling back to the embedded datasets.
    pub fn load_or_embedded(trusted_path: &Path, scam_path: &Path) -> Self {
        match Self::load(trusted_path, scam_path) {
            Ok(data) => data,
            Err(e) => {
                warn!("{}, using embedded reference data", e);
                Self::embedded()
            },
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ReferenceDataError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ReferenceDataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScamType;
    use std::io::Write;

    #[test]
    fn test_embedded_datasets_parse() {
        serde_json::from_str::<TrustedDomainSet>(EMBEDDED_TRUSTED_DOMAINS)
            .expect("embedded trusted domains must be valid JSON");
        serde_json::from_str::<ScamDomainList>(EMBEDDED_SCAM_DOMAINS)
            .expect("embedded scam domains must be valid JSON");

        let data = ReferenceData::embedded();
        assert!(data.trusted.iter().any(|d| d == "binance.com"));
        assert!(!data.scam_domains.is_empty());
    }

    #[test]
    fn test_load_from_files() {
        let mut trusted = tempfile::NamedTempFile::new().unwrap();
        write!(trusted, r#"{{"exchanges": ["Example-Exchange.com"]}}"#).unwrap();

        let mut scams = tempfile::NamedTempFile::new().unwrap();
        write!(
            scams,
            r#"{{"domains": [{{"domain": "evil.com", "type": "reported-scam"}}]}}"#
        )
        .unwrap();

        let data = ReferenceData::load(trusted.path(), scams.path()).unwrap();
        assert_eq!(data.trusted.exchanges, vec!["example-exchange.com"]);
        assert_eq!(data.scam_domains[0].scam_type, ScamType::ReportedScam);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let missing = Path::new("/nonexistent/trusted.json");
        let err = ReferenceData::load(missing, missing).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Io { .. }));
    }

    #[test]
    fn test_load_reports_invalid_json() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();

        let err = ReferenceData::load(bad.path(), bad.path()).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Parse { .. }));
    }

    #[test]
    fn test_load_or_embedded_falls_back() {
        let missing = Path::new("/nonexistent/trusted.json");
        let data = ReferenceData::load_or_embedded(missing, missing);
        assert_eq!(data, ReferenceData::embedded());
    }
}
