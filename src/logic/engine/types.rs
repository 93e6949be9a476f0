//! Engine Types
//!
//! The caller-facing analysis result and error taxonomy. Field names are
//! stable within a model version - dashboards bind to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::features::FeatureVector;
use crate::logic::model::ScoreResult;
use crate::logic::reputation::{CertValidity, DomainAge};
use crate::logic::risk::RiskClassification;
use crate::logic::url::{InvalidUrl, NormalizedUrl};

// ============================================================================
// FEATURE BREAKDOWN (display grouping)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalFeatures {
    pub url_length: u32,
    pub host_length: u32,
    pub path_length: u32,
    pub query_length: u32,
    pub fragment_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralFeatures {
    pub subdomain_count: u32,
    pub path_depth: u32,
    pub param_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityFeatures {
    pub has_https: bool,
    pub host_is_ip: bool,
    pub has_at_symbol: bool,
    pub has_explicit_port: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFeatures {
    pub credential_keyword_hits: u32,
    pub financial_keyword_hits: u32,
    pub tld: String,
    pub tld_length: u32,
    pub is_popular_tld: bool,
    pub is_shortener: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralFeatures {
    pub double_slash_count: u32,
    pub domain_age: DomainAge,
    pub certificate: CertValidity,
}

/// Grouped, display-oriented view of the extracted features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureBreakdown {
    pub lexical: LexicalFeatures,
    pub structural: StructuralFeatures,
    pub security: SecurityFeatures,
    pub content: ContentFeatures,
    pub behavioral: BehavioralFeatures,
}

impl FeatureBreakdown {
    /// Build the grouped view from the scored vector plus the reputation
    /// verdicts (which carry the Unknown states the f32 vector cannot)
    pub fn from_parts(
        url: &NormalizedUrl,
        vector: &FeatureVector,
        domain_age: DomainAge,
        certificate: CertValidity,
    ) -> Self {
        let count = |name: &str| vector.get_by_name(name).unwrap_or(0.0) as u32;
        let flag = |name: &str| vector.get_by_name(name).unwrap_or(0.0) >= 1.0;

        Self {
            lexical: LexicalFeatures {
                url_length: count("url_length"),
                host_length: count("host_length"),
                path_length: count("path_length"),
                query_length: count("query_length"),
                fragment_length: count("fragment_length"),
            },
            structural: StructuralFeatures {
                subdomain_count: count("subdomain_count"),
                path_depth: count("path_depth"),
                param_count: count("param_count"),
            },
            security: SecurityFeatures {
                has_https: flag("has_https"),
                host_is_ip: flag("host_is_ip"),
                has_at_symbol: flag("has_at_symbol"),
                has_explicit_port: flag("has_explicit_port"),
            },
            content: ContentFeatures {
                credential_keyword_hits: count("credential_keyword_hits"),
                financial_keyword_hits: count("financial_keyword_hits"),
                tld: if flag("host_is_ip") { String::new() } else { url.tld().to_string() },
                tld_length: count("tld_length"),
                is_popular_tld: flag("is_popular_tld"),
                is_shortener: flag("is_shortener"),
            },
            behavioral: BehavioralFeatures {
                double_slash_count: count("double_slash_count"),
                domain_age,
                certificate,
            },
        }
    }
}

// ============================================================================
// ANALYSIS RESULT
// ============================================================================

/// Immutable outcome of one analysis call
///
/// Owned solely by the caller after return; the engine retains no reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis_id: Uuid,
    /// Canonical display form of the analyzed URL
    pub url: String,
    pub features: FeatureBreakdown,
    /// Raw model input, for logging/training pipelines
    pub vector: FeatureVector,
    pub score: ScoreResult,
    pub classification: RiskClassification,
    /// Features that ran on imputed values because external data was
    /// unavailable or timed out
    pub degraded_features: Vec<String>,
    /// Wall-clock duration; informational only, never an input to the score
    pub processing_ms: f32,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// ENGINE STATUS
// ============================================================================

/// Engine health snapshot for status surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_version: Option<String>,
    pub reputation_available: bool,
    pub analysis_count: u64,
    pub avg_latency_ms: f32,
}

// ============================================================================
// ERRORS
// ============================================================================

/// Analysis failure taxonomy
///
/// Nothing here is ever swallowed into a fabricated score: a failed analysis
/// is a failed analysis.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Input rejected before any work
    InvalidUrl(InvalidUrl),
    /// No scoring model loaded, or the loaded model cannot score this
    /// vector - a 5xx-equivalent for the caller
    ModelUnavailable { message: String },
    /// Reputation stage exceeded its budget in fail-closed mode
    Timeout { elapsed_ms: u64 },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::InvalidUrl(e) => write!(f, "{}", e),
            AnalysisError::ModelUnavailable { message } => {
                write!(f, "Scoring model unavailable: {}", message)
            }
            AnalysisError::Timeout { elapsed_ms } => {
                write!(f, "Reputation lookups exceeded {} ms (fail-closed)", elapsed_ms)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<InvalidUrl> for AnalysisError {
    fn from(e: InvalidUrl) -> Self {
        AnalysisError::InvalidUrl(e)
    }
}
