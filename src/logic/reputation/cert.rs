//! Certificate Probe
//!
//! Establishes a TLS session to the host and reports whether the handshake
//! verified. No page content is fetched; a HEAD request is enough to force
//! certificate validation. Anything other than a clear TLS failure degrades
//! to Unknown.

use std::time::Duration;

use super::types::CertValidity;

const PROBE_TIMEOUT_SECS: u64 = 3;

pub struct CertProbe {
    agent: ureq::Agent,
}

impl CertProbe {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .redirects(0)
            .build();
        Self { agent }
    }

    /// Probe `https://host/` and classify the outcome
    pub fn certificate_validity(&self, host: &str) -> CertValidity {
        let url = format!("https://{}/", host);

        match self.agent.head(&url).call() {
            // Any HTTP response means the handshake verified
            Ok(_) => CertValidity::Valid,
            Err(ureq::Error::Status(_, _)) => CertValidity::Valid,
            Err(ureq::Error::Transport(transport)) => {
                let message = transport.to_string().to_lowercase();
                if is_tls_failure(&message) {
                    log::debug!("certificate probe failed for {}: {}", host, transport);
                    CertValidity::Invalid
                } else {
                    // Timeouts, DNS failures, refused connections: we simply
                    // don't know
                    log::debug!("certificate probe inconclusive for {}: {}", host, transport);
                    CertValidity::Unknown
                }
            }
        }
    }
}

impl Default for CertProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn is_tls_failure(message: &str) -> bool {
    ["certificate", "tls", "handshake", "unknownissuer", "invalid peer"]
        .iter()
        .any(|needle| message.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_failure_classification() {
        assert!(is_tls_failure("invalid certificate: expired"));
        assert!(is_tls_failure("tls handshake eof"));
        assert!(!is_tls_failure("connection refused"));
        assert!(!is_tls_failure("dns error: no record"));
    }
}
