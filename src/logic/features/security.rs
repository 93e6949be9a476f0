//! Security Indicator Extraction
//!
//! Classic spoofing signals: missing TLS, IP-literal hosts, userinfo `@`
//! tricks, explicit ports. The `@` check runs against the literal raw
//! authority, not the parsed host - the parser strips userinfo, which is
//! exactly where the trick hides.

use std::net::{Ipv4Addr, Ipv6Addr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::logic::url::NormalizedUrl;
use super::vector::FeatureVector;

/// Dotted-quad shape; octet range is validated by the address parser
static IPV4_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("static regex"));

pub fn extract(url: &NormalizedUrl, vector: &mut FeatureVector) {
    vector.set_by_name("has_https", bool_value(url.scheme.is_https()));
    vector.set_by_name("host_is_ip", bool_value(host_is_ip(&url.host)));
    vector.set_by_name("has_at_symbol", bool_value(raw_authority(&url.raw).contains('@')));
    vector.set_by_name("has_explicit_port", bool_value(url.port.is_some()));
}

fn bool_value(flag: bool) -> f32 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Host is a literal IPv4 or IPv6 address
///
/// Shape-matched first, then parsed - `999.1.1.1` looks like an IP but is
/// not one, and substring containment would flag `1.2.3.4.example.com`.
pub fn host_is_ip(host: &str) -> bool {
    if IPV4_RE.is_match(host) {
        return host.parse::<Ipv4Addr>().is_ok();
    }
    // The url crate keeps IPv6 literals bracketed
    let candidate = host.trim_start_matches('[').trim_end_matches(']');
    candidate.parse::<Ipv6Addr>().is_ok()
}

/// Authority part of the raw input: everything between the scheme separator
/// (if any) and the first `/`, `?` or `#`
pub fn raw_authority(raw: &str) -> &str {
    let after_scheme = match raw.find("://") {
        Some(pos) => &raw[pos + 3..],
        None => raw,
    };
    let end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    &after_scheme[..end]
}
