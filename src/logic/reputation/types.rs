//! Reputation Types
//!
//! Verdicts from the external reputation collaborator. "Unknown" is a
//! first-class value here: unavailable data must surface as Unknown, never
//! as a fabricated number.

use serde::{Deserialize, Serialize};

// ============================================================================
// DOMAIN AGE
// ============================================================================

/// Age of a domain registration, when the registry answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainAge {
    /// Days since registration
    Known(u32),
    Unknown,
}

impl DomainAge {
    pub fn days(&self) -> Option<u32> {
        match self {
            DomainAge::Known(days) => Some(*days),
            DomainAge::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, DomainAge::Known(_))
    }
}

impl std::fmt::Display for DomainAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainAge::Known(days) => write!(f, "{} days", days),
            DomainAge::Unknown => write!(f, "unknown"),
        }
    }
}

// ============================================================================
// CERTIFICATE VALIDITY
// ============================================================================

/// TLS certificate verdict for a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertValidity {
    Valid,
    Invalid,
    Unknown,
}

impl CertValidity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertValidity::Valid => "valid",
            CertValidity::Invalid => "invalid",
            CertValidity::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CertValidity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
