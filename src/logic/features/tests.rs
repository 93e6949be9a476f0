use super::layout::{IDX_CERT_VALID, IDX_DOMAIN_AGE_DAYS};
use super::{extract, FEATURE_COUNT};
use crate::logic::url::normalize;

#[test]
fn test_extract_fills_every_static_feature() {
    let url = normalize("https://www.wikipedia.org").unwrap();
    let vector = extract(&url);

    // Everything except the two external features must be present
    for i in 0..FEATURE_COUNT {
        if i == IDX_DOMAIN_AGE_DAYS || i == IDX_CERT_VALID {
            assert!(vector.is_missing(i), "feature {} should start missing", i);
        } else {
            assert!(!vector.is_missing(i), "feature {} unexpectedly missing", i);
        }
    }
}

#[test]
fn test_extract_is_deterministic() {
    let url = normalize("http://login-secure.example.com:8080//r?next=https://x.y").unwrap();
    let a = extract(&url);
    let b = extract(&url);
    assert_eq!(a.values, b.values);
    assert_eq!(a.missing, b.missing);
    assert_eq!(a.layout_hash, b.layout_hash);
}

#[test]
fn test_ip_login_scenario_features() {
    // Canonical phishing shape: IP host, plain http, credential keywords
    let url = normalize("http://192.168.1.1/login-verify-secure").unwrap();
    let vector = extract(&url);

    assert_eq!(vector.get_by_name("host_is_ip"), Some(1.0));
    assert_eq!(vector.get_by_name("has_https"), Some(0.0));
    assert!(vector.get_by_name("credential_keyword_hits").unwrap() >= 2.0);
    assert_eq!(vector.get_by_name("tld_length"), Some(0.0));
}

#[test]
fn test_wikipedia_scenario_features() {
    let url = normalize("https://www.wikipedia.org").unwrap();
    let vector = extract(&url);

    assert_eq!(vector.get_by_name("has_https"), Some(1.0));
    assert_eq!(vector.get_by_name("host_is_ip"), Some(0.0));
    assert_eq!(vector.get_by_name("credential_keyword_hits"), Some(0.0));
    assert_eq!(vector.get_by_name("subdomain_count"), Some(1.0));
    assert_eq!(vector.get_by_name("is_popular_tld"), Some(1.0));
}
