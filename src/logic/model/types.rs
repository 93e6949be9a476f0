//! Model Types
//!
//! Data structures for scoring output and model errors. No scoring logic.

use serde::{Deserialize, Serialize};

use crate::logic::features::LayoutMismatchError;

// ============================================================================
// SCORE RESULT
// ============================================================================

/// Per-feature explanation term
///
/// `contribution = weight × normalized_value`; the model's logit is
/// `steepness × Σ contributions + bias`, so the terms explain the final
/// probability directionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub name: String,
    /// Raw-scale value the model actually used (the imputation median when
    /// the feature was missing)
    pub value: f32,
    pub weight: f32,
    pub contribution: f32,
    /// True when the value was imputed rather than observed
    pub imputed: bool,
}

/// Output of a scoring model run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Probability of maliciousness, 0.0 - 1.0
    pub probability: f32,
    /// Signed per-feature terms, layout order
    pub contributions: Vec<FeatureContribution>,
    pub model_version: String,
}

impl ScoreResult {
    /// Names of features scored from imputed values
    pub fn imputed_features(&self) -> Vec<&str> {
        self.contributions
            .iter()
            .filter(|c| c.imputed)
            .map(|c| c.name.as_str())
            .collect()
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Scoring failure (incompatible input)
#[derive(Debug, Clone)]
pub enum ScoreError {
    /// Vector layout doesn't match what the model was built for
    Layout(LayoutMismatchError),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::Layout(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<LayoutMismatchError> for ScoreError {
    fn from(e: LayoutMismatchError) -> Self {
        ScoreError::Layout(e)
    }
}

/// Model artifact loading failure
#[derive(Debug, Clone)]
pub enum ModelError {
    NotFound { path: String },
    Io { message: String },
    Parse { message: String },
    ChecksumMismatch { expected: String, actual: String },
    /// Artifact is well-formed JSON but not usable (wrong lengths, wrong
    /// layout version, non-finite weights)
    Incompatible { message: String },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NotFound { path } => write!(f, "Model artifact not found: {}", path),
            ModelError::Io { message } => write!(f, "Model artifact read error: {}", message),
            ModelError::Parse { message } => write!(f, "Model artifact parse error: {}", message),
            ModelError::ChecksumMismatch { expected, actual } => {
                write!(f, "Model checksum mismatch: expected {}, got {}", expected, actual)
            }
            ModelError::Incompatible { message } => {
                write!(f, "Model artifact incompatible: {}", message)
            }
        }
    }
}

impl std::error::Error for ModelError {}
