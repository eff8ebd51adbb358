// Utility modules for the link guard backend

pub mod domain_extractor;
pub mod reference_data;
pub mod service_error;
pub mod threat_patterns;

pub use domain_extractor::extract_domain;
pub use reference_data::{ReferenceData, ReferenceDataError};
pub use service_error::ServiceError;
pub use threat_patterns::{
    detect_homograph, detect_suspicious_patterns, detect_typosquatting, find_in_blacklist,
    is_in_whitelist, levenshtein_distance, HomographCheck, PatternCheck, TyposquattingMatch,
};
