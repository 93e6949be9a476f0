//! Content Feature Extraction
//!
//! Keyword and TLD signals. The keyword lists are fixed and versioned:
//! changing them changes what the model sees, so bump KEYWORD_LIST_VERSION
//! together with any retrained weights.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::logic::url::NormalizedUrl;
use super::security::host_is_ip;
use super::vector::FeatureVector;

/// Version of the keyword/host lists below
pub const KEYWORD_LIST_VERSION: u8 = 1;

/// Credential/urgency terms typical of phishing lures
pub static CREDENTIAL_KEYWORDS: &[&str] = &[
    "secure", "account", "update", "confirm", "verify", "login", "signin",
    "bank", "paypal", "amazon", "microsoft", "apple", "google", "facebook",
    "urgent", "suspended", "limited", "unlock", "restore", "alert",
];

/// Financial/crypto bait terms
pub static FINANCIAL_KEYWORDS: &[&str] =
    &["crypto", "bitcoin", "wallet", "investment", "trading", "finance"];

/// Known URL shortener hosts (exact match on the lower-cased host)
static SHORTENER_HOSTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bit.ly", "tinyurl.com", "t.co", "goo.gl", "short.link", "ow.ly",
        "is.gd", "buff.ly", "rebrand.ly", "cutt.ly",
    ]
    .into_iter()
    .collect()
});

/// TLDs common enough that their absence is itself a weak signal
static POPULAR_TLDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["com", "org", "net", "edu", "gov", "mil"].into_iter().collect());

pub fn extract(url: &NormalizedUrl, vector: &mut FeatureVector) {
    let haystack = url.raw.to_lowercase();

    vector.set_by_name(
        "credential_keyword_hits",
        keyword_hits(&haystack, CREDENTIAL_KEYWORDS) as f32,
    );
    vector.set_by_name(
        "financial_keyword_hits",
        keyword_hits(&haystack, FINANCIAL_KEYWORDS) as f32,
    );

    // An IP literal has no TLD at all
    let tld = if host_is_ip(&url.host) { "" } else { url.tld() };
    vector.set_by_name("tld_length", tld.len() as f32);
    vector.set_by_name(
        "is_popular_tld",
        if POPULAR_TLDS.contains(tld) { 1.0 } else { 0.0 },
    );

    vector.set_by_name(
        "is_shortener",
        if SHORTENER_HOSTS.contains(url.host.as_str()) { 1.0 } else { 0.0 },
    );
}

/// Number of list entries contained in the haystack (each counted once)
pub fn keyword_hits(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| haystack.contains(*kw)).count()
}
