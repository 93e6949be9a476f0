//! Explainability Types

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureGroup;

/// One row of the static feature-weights table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub name: String,
    pub group: FeatureGroup,
    /// Signed weight; positive pushes toward malicious
    pub weight: f32,
    pub description: Option<String>,
}

/// Static per-model-version weights table for the explainability display
///
/// Produce-once, read-many: stable within a model version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsTable {
    pub model_version: String,
    pub feature_version: u8,
    pub weights: Vec<FeatureWeight>,
}

/// Per-analysis explanation: the largest score terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResult {
    pub model_version: String,
    pub top_contributions: Vec<crate::logic::model::FeatureContribution>,
}
