//! Feature Vector - Core data structure for model input
//!
//! **Versioned feature vector with layout validation**
//!
//! Uses centralized layout from `layout.rs` for:
//! - Consistent feature ordering
//! - Version tracking
//! - Layout hash for compatibility checks
//!
//! Features backed by external collaborators carry an explicit `missing`
//! mark when the data is unavailable. A missing feature is never a zero and
//! never a random value; the scoring model imputes it explicitly.

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
    FEATURE_VERSION,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned feature vector with layout metadata
///
/// This struct MUST be used for all feature data to ensure compatibility
/// between extractor and model. Never pass raw `[f32; N]` around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f32; FEATURE_COUNT],
    /// Missing-data mask; true means "no value, impute explicitly"
    pub missing: [bool; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector with current version
    pub fn new() -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
            missing: [false; FEATURE_COUNT],
        }
    }

    /// Get feature by index, None when out of range or missing
    pub fn get(&self, index: usize) -> Option<f32> {
        if index >= FEATURE_COUNT || self.missing[index] {
            return None;
        }
        Some(self.values[index])
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index, clearing any missing mark
    pub fn set(&mut self, index: usize, value: f32) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
            self.missing[index] = false;
        }
    }

    /// Set feature by name
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        if let Some(index) = super::layout::feature_index(name) {
            self.set(index, value);
            true
        } else {
            false
        }
    }

    /// Mark a feature as missing (external data unavailable)
    pub fn set_missing(&mut self, index: usize) {
        if index < FEATURE_COUNT {
            self.values[index] = 0.0;
            self.missing[index] = true;
        }
    }

    pub fn is_missing(&self, index: usize) -> bool {
        index < FEATURE_COUNT && self.missing[index]
    }

    /// Names of all currently-missing features
    pub fn missing_features(&self) -> Vec<&'static str> {
        self.missing
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .filter_map(|(i, _)| super::layout::feature_name(i))
            .collect()
    }

    /// Validate that this vector is compatible with current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Get feature names for this vector
    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values.iter().zip(self.missing.iter()))
                .map(|(name, (value, missing))| {
                    let v = if *missing {
                        serde_json::Value::Null
                    } else {
                        serde_json::json!(value)
                    };
                    (name.to_string(), v)
                })
                .collect::<serde_json::Map<_, _>>(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
