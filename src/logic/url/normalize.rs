//! URL Normalizer
//!
//! `normalize` is a pure function: raw string in, [`NormalizedUrl`] or
//! [`InvalidUrl`] out. Length and control-character checks run before the
//! parser so pathological inputs are rejected cheaply.

use url::Url;

use crate::constants::MAX_URL_LEN;
use super::types::{InvalidUrl, NormalizedUrl, Scheme};

/// Parse and canonicalize a raw input string
///
/// Scheme-less inputs default to `https` (matching what a browser address
/// bar would do). Only http/https URLs with a non-empty host are accepted.
pub fn normalize(raw: &str) -> Result<NormalizedUrl, InvalidUrl> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(InvalidUrl::Empty);
    }
    if trimmed.len() > MAX_URL_LEN {
        return Err(InvalidUrl::TooLong { length: trimmed.len() });
    }
    if trimmed.chars().any(char::is_control) {
        return Err(InvalidUrl::ControlCharacters);
    }

    let parsed = parse_with_default_scheme(trimmed)?;

    let scheme = match parsed.scheme() {
        "http" => Scheme::Http,
        "https" => Scheme::Https,
        other => {
            return Err(InvalidUrl::UnsupportedScheme { scheme: other.to_string() });
        }
    };

    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h.to_lowercase(),
        _ => return Err(InvalidUrl::MissingHost),
    };

    Ok(NormalizedUrl {
        raw: trimmed.to_string(),
        scheme,
        host,
        port: parsed.port(),
        path: parsed.path().to_string(),
        query: parsed.query().map(str::to_string),
        params: parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        fragment: parsed.fragment().map(str::to_string),
    })
}

/// Parse, retrying with an https:// prefix for scheme-less input
///
/// `example.com:8080` parses as scheme "example.com" and `example.com` as a
/// relative URL; both get the https retry. Anything carrying an explicit
/// `scheme://` is taken at face value.
fn parse_with_default_scheme(input: &str) -> Result<Url, InvalidUrl> {
    match Url::parse(input) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(url),
        Ok(url) => {
            if input.contains("://") {
                Err(InvalidUrl::UnsupportedScheme { scheme: url.scheme().to_string() })
            } else {
                parse_prefixed(input)
            }
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => parse_prefixed(input),
        Err(e) => Err(InvalidUrl::Malformed { message: e.to_string() }),
    }
}

fn parse_prefixed(input: &str) -> Result<Url, InvalidUrl> {
    Url::parse(&format!("https://{}", input))
        .map_err(|e| InvalidUrl::Malformed { message: e.to_string() })
}

// ============================================================================
// TESTS
// ============================================================================
