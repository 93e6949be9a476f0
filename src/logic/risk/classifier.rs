//! Risk Classifier
//!
//! Pure mapping from a score to a discrete category with confidence.
//! Monotonic in probability: a higher probability never produces a
//! lower-severity category.

use crate::logic::model::ScoreResult;
use super::rules::{RiskThresholds, DEGRADED_CONFIDENCE_FACTOR};
use super::types::{RiskCategory, RiskClassification};

/// Classify with default thresholds
pub fn classify(score: &ScoreResult, degraded: bool) -> RiskClassification {
    classify_with_thresholds(score, &RiskThresholds::default(), degraded)
}

/// Classify with deployment-specific thresholds
///
/// `degraded` marks analyses where external features ran on imputed values;
/// the category is unaffected but the confidence label is scaled down.
pub fn classify_with_thresholds(
    score: &ScoreResult,
    thresholds: &RiskThresholds,
    degraded: bool,
) -> RiskClassification {
    let thresholds = if thresholds.is_valid() {
        *thresholds
    } else {
        log::warn!(
            "invalid thresholds (safe_max {}, danger_min {}), falling back to defaults",
            thresholds.safe_max,
            thresholds.danger_min
        );
        RiskThresholds::default()
    };

    let probability = score.probability.clamp(0.0, 1.0);

    let category = if probability < thresholds.safe_max {
        RiskCategory::Safe
    } else if probability < thresholds.danger_min {
        RiskCategory::Suspicious
    } else {
        RiskCategory::Danger
    };

    let mut confidence = (probability - 0.5).abs() * 2.0 * 100.0;
    if degraded {
        confidence *= DEGRADED_CONFIDENCE_FACTOR;
    }

    RiskClassification {
        category,
        label: category.label().to_string(),
        risk_score: (probability * 100.0).round() as u8,
        confidence: confidence.round() as u8,
        degraded,
    }
}

// ============================================================================
// TESTS
// ============================================================================
