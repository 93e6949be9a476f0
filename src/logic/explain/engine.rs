//! Explanation Engine
//!
//! Builds the display-facing explanation data: the static weights table for
//! a model version and the top contribution terms of a single analysis.

use crate::logic::features::{feature_group, feature_name, FeatureGroup, FEATURE_VERSION};
use crate::logic::model::{ScoreResult, ScoringModel};
use super::types::{ExplainResult, FeatureWeight, WeightsTable};

/// Only terms this large are worth showing
const MIN_IMPORTANCE: f32 = 0.005;

/// Maximum rows in a per-analysis explanation
const TOP_N: usize = 5;

/// Static weights table for a model (stable per version)
pub fn weights_table(model: &dyn ScoringModel) -> WeightsTable {
    let weights = model
        .weights()
        .iter()
        .enumerate()
        .map(|(i, &weight)| FeatureWeight {
            name: feature_name(i).unwrap_or("unknown").to_string(),
            group: feature_group(i).unwrap_or(FeatureGroup::Lexical),
            weight,
            description: describe(feature_name(i).unwrap_or("")),
        })
        .collect();

    WeightsTable {
        model_version: model.version().to_string(),
        feature_version: FEATURE_VERSION,
        weights,
    }
}

/// Largest |contribution| terms of one analysis, strongest first
pub fn explain(score: &ScoreResult) -> ExplainResult {
    let mut terms: Vec<_> = score
        .contributions
        .iter()
        .filter(|c| c.contribution.abs() > MIN_IMPORTANCE)
        .cloned()
        .collect();

    terms.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    terms.truncate(TOP_N);

    ExplainResult {
        model_version: score.model_version.clone(),
        top_contributions: terms,
    }
}

fn describe(name: &str) -> Option<String> {
    match name {
        "has_https" => Some("Transport encryption in use".to_string()),
        "host_is_ip" => Some("Raw IP address instead of a domain name".to_string()),
        "has_at_symbol" => Some("Userinfo trick hiding the real host".to_string()),
        "credential_keyword_hits" => Some("Credential/urgency bait wording".to_string()),
        "financial_keyword_hits" => Some("Financial/crypto bait wording".to_string()),
        "domain_age_days" => Some("Days since domain registration".to_string()),
        "cert_valid" => Some("TLS certificate verification result".to_string()),
        "is_shortener" => Some("Known URL shortener host".to_string()),
        "double_slash_count" => Some("Embedded redirect pattern".to_string()),
        "subdomain_count" => Some("Subdomain nesting depth".to_string()),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
