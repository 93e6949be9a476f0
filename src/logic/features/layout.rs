//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! ## Why versioning matters:
//! - Model artifact compatibility
//! - Stable result fields for display consumers
//! - Log replay / training data

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Lexical (0-4) ===
    "url_length",               // 0: Raw input length in bytes
    "host_length",              // 1: Host length
    "path_length",              // 2: Path length
    "query_length",             // 3: Raw query string length
    "fragment_length",          // 4: Fragment length

    // === Structural (5-7) ===
    "subdomain_count",          // 5: Host labels minus 2, floored at 0
    "path_depth",               // 6: Non-empty path segments
    "param_count",              // 7: Parsed query key/value pairs

    // === Security (8-11) ===
    "has_https",                // 8: Scheme is https
    "host_is_ip",               // 9: Host is a literal IPv4/IPv6 address
    "has_at_symbol",            // 10: Literal '@' in the raw authority
    "has_explicit_port",        // 11: Non-default port present

    // === Content (12-16) ===
    "credential_keyword_hits",  // 12: Credential/urgency keyword matches
    "financial_keyword_hits",   // 13: Financial/crypto keyword matches
    "tld_length",               // 14: TLD length (0 for IP literals)
    "is_popular_tld",           // 15: TLD in the popular list
    "is_shortener",             // 16: Host in the shortener list

    // === Behavioral (17-19) ===
    "double_slash_count",       // 17: '//' occurrences beyond the scheme separator
    "domain_age_days",          // 18: From reputation provider (may be missing)
    "cert_valid",               // 19: From reputation provider (may be missing)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 20;

/// Indices of features sourced from the external reputation collaborator.
/// These are the only ones that may legitimately be missing.
pub const EXTERNAL_FEATURES: &[usize] = &[18, 19];

pub const IDX_DOMAIN_AGE_DAYS: usize = 18;
pub const IDX_CERT_VALID: usize = 19;

// ============================================================================
// FEATURE GROUPS
// ============================================================================

/// Display grouping for the explainability surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureGroup {
    Lexical,
    Structural,
    Security,
    Content,
    Behavioral,
}

impl FeatureGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureGroup::Lexical => "lexical",
            FeatureGroup::Structural => "structural",
            FeatureGroup::Security => "security",
            FeatureGroup::Content => "content",
            FeatureGroup::Behavioral => "behavioral",
        }
    }
}

/// Group of the feature at `index`
pub fn feature_group(index: usize) -> Option<FeatureGroup> {
    match index {
        0..=4 => Some(FeatureGroup::Lexical),
        5..=7 => Some(FeatureGroup::Structural),
        8..=11 => Some(FeatureGroup::Security),
        12..=16 => Some(FeatureGroup::Content),
        17..=19 => Some(FeatureGroup::Behavioral),
        _ => None,
    }
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches at runtime
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[FEATURE_VERSION]);

    // Hash all feature names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash (inputs are const, so this is stable per build)
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version,
            self.expected_hash,
            self.actual_version,
            self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming data matches current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 20);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(compute_layout_hash(), compute_layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
        assert!(validate_layout(FEATURE_VERSION, layout_hash() ^ 1).is_err());
    }

    #[test]
    fn test_feature_index_roundtrip() {
        for (i, name) in FEATURE_LAYOUT.iter().enumerate() {
            assert_eq!(feature_index(name), Some(i));
            assert_eq!(feature_name(i), Some(*name));
        }
        assert_eq!(feature_index("nonexistent"), None);
        assert_eq!(feature_name(FEATURE_COUNT), None);
    }

    #[test]
    fn test_every_feature_has_a_group() {
        for i in 0..FEATURE_COUNT {
            assert!(feature_group(i).is_some(), "feature {} has no group", i);
        }
        assert_eq!(feature_group(FEATURE_COUNT), None);
    }

    #[test]
    fn test_external_features() {
        assert_eq!(feature_name(IDX_DOMAIN_AGE_DAYS), Some("domain_age_days"));
        assert_eq!(feature_name(IDX_CERT_VALID), Some("cert_valid"));
        for &idx in EXTERNAL_FEATURES {
            assert_eq!(feature_group(idx), Some(FeatureGroup::Behavioral));
        }
    }
}
