//! Engine Configuration
//!
//! Per-call configuration for the orchestrator. Can be loaded from a config
//! file or built at runtime; presets cover common deployment postures.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::risk::RiskThresholds;

/// Analysis configuration (per deployment, passed per call)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Classification thresholds
    pub thresholds: RiskThresholds,
    /// Budget for the external reputation stage (milliseconds)
    pub reputation_timeout_ms: u64,
    /// When true, a reputation timeout fails the analysis instead of
    /// proceeding with unknown values
    pub fail_closed: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: RiskThresholds::default(),
            reputation_timeout_ms: constants::get_reputation_timeout_ms(),
            fail_closed: false,
        }
    }
}

impl EngineConfig {
    /// Strict posture for high-stakes deployments (e.g. banking): lower
    /// thresholds and no partial-data verdicts
    pub fn strict() -> Self {
        Self {
            thresholds: RiskThresholds::high_sensitivity(),
            fail_closed: true,
            ..Default::default()
        }
    }

    /// Lenient posture: fewer alerts, partial data tolerated
    pub fn lenient() -> Self {
        Self {
            thresholds: RiskThresholds::low_sensitivity(),
            fail_closed: false,
            ..Default::default()
        }
    }

    pub fn reputation_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reputation_timeout_ms)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(!config.fail_closed);
        assert_eq!(config.reputation_timeout_ms, 5_000);
        assert!(config.thresholds.is_valid());
    }

    #[test]
    fn test_strict_config() {
        let config = EngineConfig::strict();
        assert!(config.fail_closed);
        assert!(config.thresholds.danger_min < RiskThresholds::default().danger_min);
    }

    #[test]
    fn test_config_serializes() {
        let config = EngineConfig::strict();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert!(back.fail_closed);
        assert_eq!(back.reputation_timeout_ms, config.reputation_timeout_ms);
    }
}
