// Domain extraction for outbound link analysis
// Best-effort: never fails, always returns a (possibly empty) domain string

use percent_encoding::percent_decode_str;
use url::Url;

const WWW_PREFIX: &str = "www.";

/// Extract the domain from a full URL or a bare hostname.
///
/// Scheme, `www.`, userinfo, port, path, query and fragment are stripped. The
/// host text is taken from the input as written, so case and non-ASCII
/// characters survive (the URL parser would lower-case and punycode them,
/// which hides homograph characters). Percent escapes in the host are decoded
/// and tab/CR/LF removed, matching what the browser navigates to. Input the
/// URL parser rejects is treated as a bare domain: only `www.` and everything
/// from the first `/` is removed.
pub fn extract_domain(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    match Url::parse(&candidate) {
        Ok(url) if url.host_str().is_some() => {
            let host = decode_host(raw_host(&candidate));
            strip_www(&host).to_string()
        },
        _ => {
            let bare = strip_www(trimmed);
            bare.split('/').next().unwrap_or_default().to_string()
        },
    }
}

fn has_http_scheme(s: &str) -> bool {
    s.get(..4)
        .map(|prefix| prefix.eq_ignore_ascii_case("http"))
        .unwrap_or(false)
}

fn strip_www(host: &str) -> &str {
    match host.get(..WWW_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(WWW_PREFIX) => &host[WWW_PREFIX.len()..],
        _ => host,
    }
}

/// Host text as the URL parser sees it, keeping Unicode intact.
/// Escapes that do not decode to UTF-8 are left as written.
fn decode_host(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    match percent_decode_str(&cleaned).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => cleaned,
    }
}

/// Host portion of an already-validated absolute URL, as written.
fn raw_host(url: &str) -> &str {
    let after_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);

    let authority_end = after_scheme
        .find(|c| matches!(c, '/' | '?' | '#' | '\\'))
        .unwrap_or(after_scheme.len());
    let authority = &after_scheme[..authority_end];

    let host_and_port = authority
        .rsplit_once('@')
        .map(|(_, host)| host)
        .unwrap_or(authority);

    if host_and_port.starts_with('[') {
        // IPv6 literal: keep the brackets, drop any port
        return match host_and_port.find(']') {
            Some(end) => &host_and_port[..=end],
            None => host_and_port,
        };
    }

    match host_and_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => host_and_port,
    }
}
