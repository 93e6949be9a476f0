//! Risk Types
//!
//! Core types for risk classification. No logic - just data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK CATEGORY
// ============================================================================

/// Discrete risk levels for a scored URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Below the safe threshold, no caller action needed
    Safe,
    /// Between thresholds, warn or review
    Suspicious,
    /// At or above the danger threshold
    Danger,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Safe => "safe",
            RiskCategory::Suspicious => "suspicious",
            RiskCategory::Danger => "danger",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskCategory::Safe => 0,
            RiskCategory::Suspicious => 1,
            RiskCategory::Danger => 2,
        }
    }

    /// Display color for downstream dashboards
    pub fn color(&self) -> &'static str {
        match self {
            RiskCategory::Safe => "#10b981",       // Green
            RiskCategory::Suspicious => "#f59e0b", // Yellow
            RiskCategory::Danger => "#ef4444",     // Red
        }
    }

    /// Human-readable verdict label
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Safe => "Legitimate",
            RiskCategory::Suspicious => "Potentially Unsafe",
            RiskCategory::Danger => "Suspicious/Scam",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Final classification of a scored URL
///
/// Derived once from a ScoreResult, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskClassification {
    pub category: RiskCategory,
    /// Human-readable verdict
    pub label: String,
    /// round(probability * 100)
    pub risk_score: u8,
    /// round(|probability - 0.5| * 2 * 100), reduced when degraded
    pub confidence: u8,
    /// True when external features were unavailable and the score ran on
    /// imputed values
    pub degraded: bool,
}
