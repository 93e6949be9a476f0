//! URL Types
//!
//! Data structures only - parsing logic lives in `normalize.rs`.

use serde::{Deserialize, Serialize};

// ============================================================================
// SCHEME
// ============================================================================

/// Accepted URL schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    pub fn is_https(&self) -> bool {
        matches!(self, Scheme::Https)
    }

    /// Default port for the scheme
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// NORMALIZED URL
// ============================================================================

/// Canonical representation of an accepted input URL
///
/// Immutable once constructed. `host` is stored lower-cased (the canonical
/// form); `raw` preserves the original input verbatim for features that must
/// match on the literal string (e.g. `@` in the authority).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedUrl {
    /// Original input, trimmed but otherwise untouched
    pub raw: String,
    pub scheme: Scheme,
    /// Lower-cased host (domain or IP literal)
    pub host: String,
    /// Explicit non-default port, if any
    pub port: Option<u16>,
    /// Canonical path ("/" when the input had none)
    pub path: String,
    /// Raw query string without the leading '?'
    pub query: Option<String>,
    /// Parsed query key/value pairs, in input order
    pub params: Vec<(String, String)>,
    pub fragment: Option<String>,
}

impl NormalizedUrl {
    /// Number of dot-separated labels in the host
    pub fn host_labels(&self) -> usize {
        self.host.split('.').filter(|l| !l.is_empty()).count()
    }

    /// Last dot-separated host label, empty for IP literals or single-label
    /// hosts
    pub fn tld(&self) -> &str {
        if self.host_labels() < 2 {
            return "";
        }
        self.host.rsplit('.').next().unwrap_or("")
    }
}

impl std::fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

// ============================================================================
// ERROR
// ============================================================================

/// Rejection reasons for malformed input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidUrl {
    /// Empty or whitespace-only input
    Empty,
    /// Input exceeds the maximum accepted length
    TooLong { length: usize },
    /// Input contains ASCII/Unicode control characters
    ControlCharacters,
    /// Scheme other than http/https
    UnsupportedScheme { scheme: String },
    /// No host segment present
    MissingHost,
    /// Parser rejected the input
    Malformed { message: String },
}

impl std::fmt::Display for InvalidUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidUrl::Empty => write!(f, "Empty URL"),
            InvalidUrl::TooLong { length } => {
                write!(f, "URL too long: {} bytes (max {})", length, crate::constants::MAX_URL_LEN)
            }
            InvalidUrl::ControlCharacters => write!(f, "URL contains control characters"),
            InvalidUrl::UnsupportedScheme { scheme } => {
                write!(f, "Unsupported scheme: {}", scheme)
            }
            InvalidUrl::MissingHost => write!(f, "URL has no host"),
            InvalidUrl::Malformed { message } => write!(f, "Malformed URL: {}", message),
        }
    }
}

impl std::error::Error for InvalidUrl {}
