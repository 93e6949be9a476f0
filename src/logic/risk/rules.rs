//! Risk Thresholds & Rules
//!
//! Threshold definitions for classification. No classify logic here - just
//! constants and the configurable threshold set.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (Defaults)
// ============================================================================

/// Below this probability = Safe
pub const SAFE_THRESHOLD: f32 = 0.4;

/// At or above this probability = Danger
pub const DANGER_THRESHOLD: f32 = 0.7;

/// Confidence multiplier when external features were degraded to imputed
/// values - partial data means a less certain verdict
pub const DEGRADED_CONFIDENCE_FACTOR: f32 = 0.8;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Classification thresholds (per-deployment override)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Below this = Safe
    pub safe_max: f32,
    /// At or above this = Danger, between = Suspicious
    pub danger_min: f32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            safe_max: SAFE_THRESHOLD,
            danger_min: DANGER_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    /// High sensitivity - lower thresholds, more alerts
    pub fn high_sensitivity() -> Self {
        Self { safe_max: 0.3, danger_min: 0.6 }
    }

    /// Low sensitivity - higher thresholds, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self { safe_max: 0.5, danger_min: 0.8 }
    }

    /// Thresholds are usable when ordered and inside [0,1]
    pub fn is_valid(&self) -> bool {
        self.safe_max >= 0.0
            && self.safe_max < self.danger_min
            && self.danger_min <= 1.0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.safe_max, 0.4);
        assert_eq!(thresholds.danger_min, 0.7);
        assert!(thresholds.is_valid());
    }

    #[test]
    fn test_sensitivity_presets_are_valid() {
        assert!(RiskThresholds::high_sensitivity().is_valid());
        assert!(RiskThresholds::low_sensitivity().is_valid());
    }

    #[test]
    fn test_inverted_thresholds_invalid() {
        let inverted = RiskThresholds { safe_max: 0.8, danger_min: 0.4 };
        assert!(!inverted.is_valid());
    }
}
