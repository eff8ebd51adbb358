pub mod analysis;
pub mod check_url;
pub mod reference;

// Re-export common types
pub use analysis::{AnalysisSource, ThreatLevel, UrlAnalysisResult};
pub use check_url::{CheckUrlRequest, CheckUrlResponse, ThreatDetails};
pub use reference::{ScamDomainEntry, ScamDomainList, ScamType, TrustedDomainSet};
