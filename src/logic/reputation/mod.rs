//! Reputation Module - External Domain Intelligence
//!
//! The only collaborator on the analysis path. Both operations are total:
//! they degrade to Unknown instead of failing or blocking indefinitely, and
//! the orchestrator additionally bounds the whole stage with a timeout.
//!
//! The active provider is process-wide and swapped atomically, like the
//! model artifact. No provider installed means every lookup is Unknown.

pub mod cert;
pub mod rdap;
pub mod types;

pub use types::{CertValidity, DomainAge};

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

/// Consumed interface for domain reputation data
///
/// Implementations may block (they run on the blocking pool) but must bound
/// their own latency; the engine assumes a call returns within a few
/// seconds.
pub trait ReputationProvider: Send + Sync {
    fn domain_age_days(&self, host: &str) -> DomainAge;
    fn certificate_validity(&self, host: &str) -> CertValidity;
}

// ============================================================================
// LIVE PROVIDER
// ============================================================================

/// Production provider: RDAP for registration age, TLS probe for the
/// certificate verdict
pub struct LiveReputation {
    rdap: rdap::RdapClient,
    cert: cert::CertProbe,
}

impl LiveReputation {
    pub fn new() -> Self {
        Self {
            rdap: rdap::RdapClient::new(),
            cert: cert::CertProbe::new(),
        }
    }
}

impl Default for LiveReputation {
    fn default() -> Self {
        Self::new()
    }
}

impl ReputationProvider for LiveReputation {
    fn domain_age_days(&self, host: &str) -> DomainAge {
        self.rdap.domain_age(host)
    }

    fn certificate_validity(&self, host: &str) -> CertValidity {
        self.cert.certificate_validity(host)
    }
}

// ============================================================================
// STATE
// ============================================================================

static PROVIDER: Lazy<RwLock<Option<Arc<dyn ReputationProvider>>>> =
    Lazy::new(|| RwLock::new(None));

// ============================================================================
// PUBLIC API
// ============================================================================

/// Install a reputation provider (atomic swap)
pub fn install(provider: Arc<dyn ReputationProvider>) {
    *PROVIDER.write() = Some(provider);
    log::info!("Reputation provider installed");
}

/// Install the live RDAP/TLS provider
pub fn install_live() {
    install(Arc::new(LiveReputation::new()));
}

/// Remove the provider; subsequent analyses mark external features unknown
pub fn clear() {
    *PROVIDER.write() = None;
    log::info!("Reputation provider removed");
}

/// Current provider handle, if any
pub fn current() -> Option<Arc<dyn ReputationProvider>> {
    PROVIDER.read().clone()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    impl ReputationProvider for FixedProvider {
        fn domain_age_days(&self, _host: &str) -> DomainAge {
            DomainAge::Known(3650)
        }

        fn certificate_validity(&self, _host: &str) -> CertValidity {
            CertValidity::Valid
        }
    }

    #[test]
    fn test_install_and_clear() {
        let _guard = crate::logic::test_support::global_state_lock();

        install(Arc::new(FixedProvider));
        let provider = current().expect("provider installed");
        assert_eq!(provider.domain_age_days("example.com"), DomainAge::Known(3650));
        assert_eq!(provider.certificate_validity("example.com"), CertValidity::Valid);

        clear();
        assert!(current().is_none());
    }
}
