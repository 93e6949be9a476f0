//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default RDAP endpoint, only edit this file.

/// Maximum accepted input length in bytes. Anything longer is rejected
/// before any parsing work happens.
pub const MAX_URL_LEN: usize = 2048;

/// Default budget for the external reputation stage (milliseconds)
pub const DEFAULT_REPUTATION_TIMEOUT_MS: u64 = 5_000;

/// Default RDAP bootstrap endpoint for domain registration lookups
///
/// rdap.org redirects to the registry responsible for the queried TLD.
pub const DEFAULT_RDAP_URL: &str = "https://rdap.org";

/// Engine version
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name
pub const ENGINE_NAME: &str = "url-risk-core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get RDAP base URL from environment or use default
pub fn get_rdap_url() -> String {
    std::env::var("URL_RISK_RDAP_URL").unwrap_or_else(|_| DEFAULT_RDAP_URL.to_string())
}

/// Get reputation timeout from environment or use default
pub fn get_reputation_timeout_ms() -> u64 {
    std::env::var("URL_RISK_REPUTATION_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REPUTATION_TIMEOUT_MS)
}

/// Check if external reputation lookups are enabled
pub fn is_reputation_enabled() -> bool {
    std::env::var("URL_RISK_REPUTATION_ENABLED")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
