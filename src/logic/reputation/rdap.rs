//! RDAP Domain Age Client
//!
//! Queries the RDAP bootstrap service for a domain's registration event and
//! derives its age in days. All failure modes degrade to
//! [`DomainAge::Unknown`]:
//! - Local caching to reduce registry traffic
//! - Rate limiting (bootstrap services throttle aggressively)
//! - Bounded request latency via agent timeouts

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::Deserialize;

use crate::constants;
use super::types::DomainAge;

// ============================================================================
// CONSTANTS
// ============================================================================

const RATE_LIMIT_PER_MINUTE: u32 = 30;
const CACHE_MAX_SIZE: usize = 1000;
const CACHE_TTL_HOURS: i64 = 24;
const REQUEST_TIMEOUT_SECS: u64 = 3;

// ============================================================================
// RDAP CLIENT
// ============================================================================

pub struct RdapClient {
    base_url: String,
    agent: ureq::Agent,
    state: Mutex<ClientState>,
}

struct ClientState {
    cache: HashMap<String, CachedAge>,
    requests_this_minute: u32,
    minute_start: Instant,
}

struct CachedAge {
    age: DomainAge,
    cached_at: i64,
}

impl RdapClient {
    pub fn new() -> Self {
        Self::with_base_url(constants::get_rdap_url())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();

        Self {
            base_url,
            agent,
            state: Mutex::new(ClientState {
                cache: HashMap::new(),
                requests_this_minute: 0,
                minute_start: Instant::now(),
            }),
        }
    }

    /// Age in days of the host's registrable domain
    ///
    /// IP literals have no registration; they come back Unknown immediately.
    pub fn domain_age(&self, host: &str) -> DomainAge {
        let Some(domain) = registrable_domain(host) else {
            return DomainAge::Unknown;
        };

        if let Some(cached) = self.get_cached(&domain) {
            return cached;
        }

        if !self.try_acquire_slot() {
            log::warn!("RDAP rate limit reached, degrading {} to unknown", domain);
            return DomainAge::Unknown;
        }

        let age = match self.fetch_registration(&domain) {
            Ok(age) => age,
            Err(e) => {
                log::warn!("RDAP lookup failed for {}: {}", domain, e);
                DomainAge::Unknown
            }
        };

        // Cache even Unknown: a registry that just refused us will refuse
        // the next call inside the TTL too
        self.cache_result(&domain, age);
        age
    }

    fn get_cached(&self, domain: &str) -> Option<DomainAge> {
        let state = self.state.lock();
        let cached = state.cache.get(domain)?;
        let age_hours = (chrono::Utc::now().timestamp() - cached.cached_at) / 3600;
        if age_hours < CACHE_TTL_HOURS {
            Some(cached.age)
        } else {
            None
        }
    }

    fn try_acquire_slot(&self) -> bool {
        let mut state = self.state.lock();
        let now = Instant::now();

        if now.duration_since(state.minute_start) >= Duration::from_secs(60) {
            state.minute_start = now;
            state.requests_this_minute = 0;
        }

        if state.requests_this_minute >= RATE_LIMIT_PER_MINUTE {
            return false;
        }

        state.requests_this_minute += 1;
        true
    }

    fn cache_result(&self, domain: &str, age: DomainAge) {
        let mut state = self.state.lock();

        if state.cache.len() >= CACHE_MAX_SIZE {
            // Evict oldest 10%
            let mut entries: Vec<_> = state
                .cache
                .iter()
                .map(|(k, v)| (k.clone(), v.cached_at))
                .collect();
            entries.sort_by(|a, b| a.1.cmp(&b.1));

            for (key, _) in entries.into_iter().take(CACHE_MAX_SIZE / 10) {
                state.cache.remove(&key);
            }
        }

        state.cache.insert(
            domain.to_string(),
            CachedAge { age, cached_at: chrono::Utc::now().timestamp() },
        );
    }

    fn fetch_registration(&self, domain: &str) -> Result<DomainAge, Box<dyn std::error::Error>> {
        let url = format!("{}/domain/{}", self.base_url, domain);
        let response: RdapResponse = self.agent.get(&url).call()?.into_json()?;

        let registration = response
            .events
            .iter()
            .find(|e| e.event_action == "registration")
            .ok_or("no registration event in RDAP response")?;

        let registered = chrono::DateTime::parse_from_rfc3339(&registration.event_date)?;
        let days = (chrono::Utc::now() - registered.with_timezone(&chrono::Utc)).num_days();

        if days < 0 {
            return Err("registration date in the future".into());
        }

        Ok(DomainAge::Known(days.min(u32::MAX as i64) as u32))
    }

    /// Get cache stats
    pub fn cache_stats(&self) -> (usize, usize) {
        (self.state.lock().cache.len(), CACHE_MAX_SIZE)
    }

    pub fn clear_cache(&self) {
        self.state.lock().cache.clear();
    }
}

impl Default for RdapClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RESPONSE PARSING
// ============================================================================

#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: String,
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Last two labels of the host; None for IP literals and single-label hosts
///
/// An approximation of the registrable domain - good enough for RDAP, which
/// redirects to the authoritative registry anyway. Multi-label public
/// suffixes (co.uk) resolve via the registry redirect.
pub fn registrable_domain(host: &str) -> Option<String> {
    if crate::logic::features::security::host_is_ip(host) {
        return None;
    }

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return None;
    }

    Some(labels[labels.len() - 2..].join("."))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_domain() {
        assert_eq!(registrable_domain("www.wikipedia.org"), Some("wikipedia.org".to_string()));
        assert_eq!(registrable_domain("example.com"), Some("example.com".to_string()));
        assert_eq!(registrable_domain("a.b.c.example.com"), Some("example.com".to_string()));
        assert_eq!(registrable_domain("localhost"), None);
        assert_eq!(registrable_domain("192.168.1.1"), None);
    }

    #[test]
    fn test_ip_host_is_unknown_without_network() {
        let client = RdapClient::with_base_url("http://invalid.localhost".to_string());
        assert_eq!(client.domain_age("192.168.1.1"), DomainAge::Unknown);
    }

    #[test]
    fn test_parse_rdap_events() {
        let body = r#"{
            "events": [
                {"eventAction": "registration", "eventDate": "2001-01-13T00:12:14Z"},
                {"eventAction": "expiration", "eventDate": "2030-01-13T00:00:00Z"}
            ]
        }"#;
        let parsed: RdapResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.events.len(), 2);
        assert_eq!(parsed.events[0].event_action, "registration");
    }

    #[test]
    fn test_cache_roundtrip() {
        let client = RdapClient::with_base_url("http://invalid.localhost".to_string());
        client.cache_result("example.com", DomainAge::Known(9000));
        assert_eq!(client.get_cached("example.com"), Some(DomainAge::Known(9000)));
        assert_eq!(client.cache_stats().0, 1);

        client.clear_cache();
        assert_eq!(client.cache_stats().0, 0);
    }
}
