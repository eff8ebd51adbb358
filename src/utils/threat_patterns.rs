// Scam domain detection primitives
// Whitelist/blacklist lookups, typosquatting, homograph and suspicious pattern checks.
// Every function here is pure and total.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::models::{ScamDomainEntry, TrustedDomainSet};

// =============================================================================
// STATIC TABLES
// =============================================================================

lazy_static! {
    /// Non-Latin characters that render almost identically to an ASCII letter
    static ref CONFUSABLES: HashSet<char> = [
        // Cyrillic: a e o p c x y s
        'а', 'е', 'о', 'р', 'с', 'х', 'у', 'ѕ',
        // Greek: v o p c
        'ν', 'ο', 'ρ', 'ϲ',
    ]
    .into_iter()
    .collect();

    static ref NUMERIC_RUN: Regex =
        Regex::new(r"[0-9]{3,}").expect("Invalid numeric run regex");
}

/// Words that show up in "free money" scam domains
const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "free",
    "giveaway",
    "airdrop",
    "double",
    "triple",
    "guaranteed",
    "profit",
    "earn",
    "claim",
    "bonus",
    "reward",
    "prize",
    "winner",
    "lucky",
];

/// Free TLDs heavily abused for throwaway scam sites
const SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf", ".gq"];

const MAX_DOMAIN_LENGTH: usize = 40;
const MAX_HYPHENS: usize = 3;
const MAX_TYPO_DISTANCE: usize = 2;

// =============================================================================
// RESULT TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TyposquattingMatch {
    pub legitimate: String,
    pub distance: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomographCheck {
    pub has_homograph: bool,
    /// Offending characters in order of appearance, repeats included
    pub suspicious_chars: Vec<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCheck {
    pub is_suspicious: bool,
    pub reasons: Vec<String>,
}

// =============================================================================
// STRING DISTANCE
// =============================================================================

/// Levenshtein edit distance over Unicode scalar values.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Edits tolerated when imitating `legitimate`: `min(2, floor(0.2 * len))`.
pub fn typo_threshold(legitimate: &str) -> usize {
    (legitimate.chars().count() / 5).min(MAX_TYPO_DISTANCE)
}

// =============================================================================
// LIST MEMBERSHIP
// =============================================================================

pub fn is_in_whitelist(domain: &str, trusted: &TrustedDomainSet) -> bool {
    let domain = domain.to_lowercase();
    trusted.iter().any(|t| t.eq_ignore_ascii_case(&domain))
}

pub fn find_in_blacklist<'a>(
    domain: &str,
    scam_domains: &'a [ScamDomainEntry],
) -> Option<&'a ScamDomainEntry> {
    let domain = domain.to_lowercase();
    scam_domains
        .iter()
        .find(|entry| entry.domain.to_lowercase() == domain)
}

// =============================================================================
// TYPOSQUATTING
// =============================================================================

/// First trusted domain (in partition order) within the edit budget.
///
/// This is not a closest-match search: list order is the tie-break.
pub fn detect_typosquatting(
    domain: &str,
    trusted: &TrustedDomainSet,
) -> Option<TyposquattingMatch> {
    let domain = domain.to_lowercase();

    trusted.iter().find_map(|legitimate| {
        let distance = levenshtein_distance(&domain, legitimate);
        if distance > 0 && distance <= typo_threshold(legitimate) {
            Some(TyposquattingMatch {
                legitimate: legitimate.to_string(),
                distance,
            })
        } else {
            None
        }
    })
}

// =============================================================================
// HOMOGRAPH
// =============================================================================

pub fn detect_homograph(domain: &str) -> HomographCheck {
    let suspicious_chars: Vec<char> = domain
        .chars()
        .filter(|c| CONFUSABLES.contains(c))
        .collect();

    HomographCheck {
        has_homograph: !suspicious_chars.is_empty(),
        suspicious_chars,
    }
}

// =============================================================================
// SUSPICIOUS PATTERNS
// =============================================================================

pub fn detect_suspicious_patterns(domain: &str) -> PatternCheck {
    let mut reasons = Vec::new();
    let lower = domain.to_lowercase();

    for keyword in SUSPICIOUS_KEYWORDS {
        if lower.contains(keyword) {
            reasons.push(format!("contains suspicious keyword: \"{}\"", keyword));
        }
    }

    for tld in SUSPICIOUS_TLDS {
        if lower.ends_with(tld) {
            reasons.push(format!("suspicious TLD: {} (common in scams)", tld));
        }
    }

    if domain.chars().count() > MAX_DOMAIN_LENGTH {
        reasons.push("excessively long domain".to_string());
    }

    let hyphens = domain.matches('-').count();
    if hyphens > MAX_HYPHENS {
        reasons.push(format!("too many hyphens in domain ({})", hyphens));
    }

    if NUMERIC_RUN.is_match(domain) {
        reasons.push("long numeric sequence in domain".to_string());
    }

    PatternCheck {
        is_suspicious: !reasons.is_empty(),
        reasons,
    }
}
